//! Department page: detail panels, the analytics toggle and the add button.

use crate::shared::dom::{DomNode, DomRoot, Selector};

const HIDDEN: &str = "hidden";
const FALLBACK_NAME: &str = "Department";
const SECTIONS: [&str; 3] = ["deptOperations", "deptStaff", "deptAnalytics"];
const NAME_TARGETS: [&str; 3] = ["opsDeptName", "staffDeptName", "analyticsDeptName"];

pub const ADD_DEPARTMENT_NOTICE: &str =
    "Add New Department \u{2014} modal will open here (to be implemented).";

pub struct DepartmentPanel<N: DomNode> {
    sections: Vec<N>,
    name_targets: Vec<N>,
    analytics: Option<N>,
    analytics_toggle: Option<N>,
    add_button: Option<N>,
}

impl<N: DomNode> DepartmentPanel<N> {
    pub fn resolve<R: DomRoot<Node = N>>(root: &R) -> Option<Self> {
        let panel = Self {
            sections: SECTIONS.iter().filter_map(|id| root.by_id(id)).collect(),
            name_targets: NAME_TARGETS.iter().filter_map(|id| root.by_id(id)).collect(),
            analytics: root.by_id("deptAnalytics"),
            analytics_toggle: root.by_id("toggleAnalyticsBtn"),
            add_button: root.by_id("addDeptBtn"),
        };
        if panel.sections.is_empty()
            && panel.analytics_toggle.is_none()
            && panel.add_button.is_none()
        {
            return None;
        }
        Some(panel)
    }

    pub fn analytics_toggle(&self) -> Option<&N> {
        self.analytics_toggle.as_ref()
    }

    pub fn add_button(&self) -> Option<&N> {
        self.add_button.as_ref()
    }

    /// Open the detail panels for the department a `.btn-view` belongs to.
    /// Returns the department name shown.
    pub fn view(&self, button: &N) -> String {
        let name = department_name(button);
        for section in &self.sections {
            section.remove_class(HIDDEN);
        }
        for target in &self.name_targets {
            target.set_text(&name);
        }
        self.relabel_analytics();
        log::debug!("department details for {}", name);
        name
    }

    pub fn toggle_analytics(&self) {
        if let Some(analytics) = &self.analytics {
            analytics.toggle_class(HIDDEN, !analytics.has_class(HIDDEN));
        }
        self.relabel_analytics();
    }

    pub fn relabel_analytics(&self) {
        let (Some(analytics), Some(toggle)) = (&self.analytics, &self.analytics_toggle) else {
            return;
        };
        let label = if analytics.has_class(HIDDEN) {
            "Show Analytics"
        } else {
            "Hide Analytics"
        };
        toggle.clear();
        if let Some(icon) = toggle.append("i") {
            icon.set_class_name("fas fa-chart-bar");
        }
        toggle.append_text(&format!(" {}", label));
    }
}

fn department_name<N: DomNode>(button: &N) -> String {
    let non_empty = |s: String| {
        let s = s.trim().to_string();
        (!s.is_empty()).then_some(s)
    };
    let card = button.closest(&Selector::class("dept-card"));
    let row = button.closest(&Selector::tag("tr"));

    card.as_ref()
        .and_then(|c| c.attr("data-dept").and_then(non_empty))
        .or_else(|| {
            card.as_ref()
                .and_then(|c| c.select(&Selector::tag("h3")))
                .and_then(|h| non_empty(h.text()))
        })
        .or_else(|| row.as_ref().and_then(|r| r.attr("data-dept").and_then(non_empty)))
        .or_else(|| {
            row.as_ref()
                .and_then(|r| r.children().into_iter().next())
                .and_then(|cell| non_empty(cell.text()))
        })
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::memory::{MemoryDom, MemoryNode};

    fn page(dom: &MemoryDom) -> DepartmentPanel<MemoryNode> {
        let root = dom.root();
        for (section, name) in SECTIONS.iter().zip(NAME_TARGETS) {
            root.add("section")
                .with_id(section)
                .with_class(HIDDEN)
                .add("span")
                .with_id(name);
        }
        root.add("button").with_id("toggleAnalyticsBtn");
        DepartmentPanel::resolve(dom).unwrap()
    }

    #[test]
    fn test_view_from_card_heading() {
        let dom = MemoryDom::new();
        let panel = page(&dom);
        let card = dom.root().add("div").with_class("dept-card");
        card.add("h3").with_text(" Engineering ");
        let button = card.add("button").with_class("btn-view");

        assert_eq!(panel.view(&button), "Engineering");
        assert!(!dom.by_id("deptStaff").unwrap().has_class(HIDDEN));
        assert_eq!(dom.by_id("analyticsDeptName").unwrap().text(), "Engineering");
        assert_eq!(dom.by_id("toggleAnalyticsBtn").unwrap().text(), " Hide Analytics");
    }

    #[test]
    fn test_view_from_row() {
        let dom = MemoryDom::new();
        let panel = page(&dom);
        let row = dom.root().add("table").add("tr");
        row.add("td").with_text("Finance");
        let button = row.add("td").add("button").with_class("btn-view");
        assert_eq!(panel.view(&button), "Finance");

        row.set_attr("data-dept", "Treasury");
        assert_eq!(panel.view(&button), "Treasury");
    }

    #[test]
    fn test_view_without_context_uses_fallback() {
        let dom = MemoryDom::new();
        let panel = page(&dom);
        let button = dom.root().add("button").with_class("btn-view");
        assert_eq!(panel.view(&button), FALLBACK_NAME);
    }

    #[test]
    fn test_add_button_alone_resolves_panel() {
        let dom = MemoryDom::new();
        let add = dom.root().add("button").with_id("addDeptBtn");
        let panel = DepartmentPanel::resolve(&dom).unwrap();
        assert_eq!(panel.add_button(), Some(&add));
        assert!(panel.analytics_toggle().is_none());
    }

    #[test]
    fn test_toggle_analytics_relabels() {
        let dom = MemoryDom::new();
        let panel = page(&dom);
        let analytics = dom.by_id("deptAnalytics").unwrap();

        panel.toggle_analytics();
        assert!(!analytics.has_class(HIDDEN));
        assert_eq!(dom.by_id("toggleAnalyticsBtn").unwrap().text(), " Hide Analytics");

        panel.toggle_analytics();
        assert!(analytics.has_class(HIDDEN));
        assert_eq!(dom.by_id("toggleAnalyticsBtn").unwrap().text(), " Show Analytics");
    }
}
