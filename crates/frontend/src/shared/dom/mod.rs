//! DOM access used by the page components.
//!
//! Components are written against [`DomNode`]/[`DomRoot`] so the same code
//! drives the browser document ([`web`]) and the in-memory document the unit
//! tests build ([`memory`]).

pub mod selector;
pub mod web;

#[cfg(test)]
pub mod memory;

pub use selector::Selector;

/// One element of the page.
pub trait DomNode: Clone + PartialEq + 'static {
    fn tag(&self) -> String;

    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);
    fn remove_attr(&self, name: &str);

    fn has_class(&self, class: &str) -> bool;
    fn toggle_class(&self, class: &str, on: bool);
    /// Replace the whole class list.
    fn set_class_name(&self, classes: &str);

    /// Concatenated text of the element and its descendants.
    fn text(&self) -> String;
    /// Replace all children with a single text node.
    fn set_text(&self, text: &str);

    /// Rendered width in pixels, 0 when not laid out.
    fn offset_width(&self) -> i32;

    fn style(&self, property: &str) -> String;
    /// Set an inline style property; an empty value removes it.
    fn set_style(&self, property: &str, value: &str);

    /// Current value of an input, select or textarea. Empty for anything else.
    fn value(&self) -> String;
    fn set_value(&self, value: &str);

    /// Descendants matching `selector`, in document order.
    fn select_all(&self, selector: &Selector) -> Vec<Self>;
    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, selector: &Selector) -> Option<Self>;
    /// Element children, in order.
    fn children(&self) -> Vec<Self>;

    fn append(&self, tag: &str) -> Option<Self>;
    fn append_text(&self, text: &str);
    fn clear(&self);
    fn remove(&self);
    /// Inclusive descendant test.
    fn contains(&self, other: &Self) -> bool;

    fn select(&self, selector: &Selector) -> Option<Self> {
        self.select_all(selector).into_iter().next()
    }

    fn add_class(&self, class: &str) {
        self.toggle_class(class, true);
    }

    fn remove_class(&self, class: &str) {
        self.toggle_class(class, false);
    }

    fn is_disabled(&self) -> bool {
        self.attr("disabled").is_some()
    }

    fn set_disabled(&self, disabled: bool) {
        if disabled {
            self.set_attr("disabled", "");
        } else {
            self.remove_attr("disabled");
        }
    }

    /// Show or hide through the inline `display` property.
    fn set_displayed(&self, displayed: bool) {
        self.set_style("display", if displayed { "" } else { "none" });
    }

    fn is_displayed(&self) -> bool {
        self.style("display") != "none"
    }
}

/// The document a page's nodes live in.
pub trait DomRoot: Clone + 'static {
    type Node: DomNode;

    fn by_id(&self, id: &str) -> Option<Self::Node>;
    fn select_all(&self, selector: &Selector) -> Vec<Self::Node>;

    fn select(&self, selector: &Selector) -> Option<Self::Node> {
        self.select_all(selector).into_iter().next()
    }
}
