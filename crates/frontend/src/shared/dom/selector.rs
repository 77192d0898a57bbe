//! Typed element selector.
//!
//! Covers the compound selectors the dashboard markup needs
//! (`tag.class[attr="value"]`) without descendant combinators. Scoping is
//! done by selecting from a container node instead.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl Selector {
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_lowercase()),
            ..Self::default()
        }
    }

    pub fn class(class: &str) -> Self {
        Self::default().and_class(class)
    }

    pub fn attr(name: &str) -> Self {
        Self::default().and_attr(name)
    }

    pub fn attr_eq(name: &str, value: &str) -> Self {
        Self::default().and_attr_eq(name, value)
    }

    pub fn and_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn and_attr(mut self, name: &str) -> Self {
        self.attrs.push((name.to_string(), None));
        self
    }

    pub fn and_attr_eq(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), Some(value.to_string())));
        self
    }

    /// CSS form, e.g. `tr.row[data-emp-id="E9"]`.
    pub fn to_css(&self) -> String {
        let mut css = self.tag.clone().unwrap_or_default();
        for class in &self.classes {
            css.push('.');
            css.push_str(class);
        }
        for (name, value) in &self.attrs {
            match value {
                Some(value) => css.push_str(&format!("[{}=\"{}\"]", name, escape(value))),
                None => css.push_str(&format!("[{}]", name)),
            }
        }
        if css.is_empty() {
            css.push('*');
        }
        css
    }

    /// Match against an element described by its tag and attribute lookup.
    pub fn matches<'a>(&self, tag: &str, attr: impl Fn(&str) -> Option<&'a str>) -> bool {
        if let Some(wanted) = &self.tag {
            if !tag.eq_ignore_ascii_case(wanted) {
                return false;
            }
        }
        if !self.classes.is_empty() {
            let class_list = attr("class").unwrap_or("");
            if !self
                .classes
                .iter()
                .all(|class| class_list.split_whitespace().any(|c| c == class))
            {
                return false;
            }
        }
        self.attrs.iter().all(|(name, value)| match (attr(name), value) {
            (Some(actual), Some(wanted)) => actual == wanted,
            (Some(_), None) => true,
            (None, _) => false,
        })
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
