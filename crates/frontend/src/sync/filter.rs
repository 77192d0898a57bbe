//! Record filter engine.
//!
//! Recomputes visibility of every record node in every listing from the
//! current [`FilterState`]. The decision is taken per record id, so a record
//! shown as a card and as a row is either visible in both or in neither.

use super::registry::FilterBinding;
use crate::shared::dom::DomNode;
use contracts::shared::filter::{FilterState, ALL_CATEGORIES};
use std::collections::HashMap;

pub struct RecordFilter<N: DomNode> {
    binding: FilterBinding<N>,
}

impl<N: DomNode> RecordFilter<N> {
    pub fn new(binding: FilterBinding<N>) -> Self {
        Self { binding }
    }

    pub fn binding(&self) -> &FilterBinding<N> {
        &self.binding
    }

    /// State read from the search box and category select.
    pub fn current_state(&self) -> FilterState {
        let query = self
            .binding
            .search_input
            .as_ref()
            .map(|input| input.value())
            .unwrap_or_default();
        let category = self
            .binding
            .category_select
            .as_ref()
            .map(|select| select.value())
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());
        FilterState::new(&query, &category)
    }

    /// Re-apply the filter from the controls. Returns the number of visible
    /// record nodes.
    pub fn refresh(&self) -> usize {
        self.apply(&self.current_state())
    }

    pub fn apply(&self, state: &FilterState) -> usize {
        let records: Vec<_> = self
            .binding
            .listings
            .iter()
            .flat_map(|(container, item)| container.select_all(item))
            .map(|node| {
                let fields = self.binding.shape.read(&node);
                let matched = state.matches(&fields);
                (node, fields.id, matched)
            })
            .collect();

        let mut by_id: HashMap<&str, bool> = HashMap::new();
        for (_, id, matched) in &records {
            if !id.is_empty() {
                *by_id.entry(id.as_str()).or_insert(false) |= *matched;
            }
        }

        let mut visible = 0;
        for (node, id, matched) in &records {
            let show = by_id.get(id.as_str()).copied().unwrap_or(*matched);
            node.set_displayed(show);
            if show {
                visible += 1;
            }
        }
        log::debug!(
            "filter '{}' / {:?}: {} of {} shown",
            state.query(),
            state.category,
            visible,
            records.len()
        );
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::memory::{MemoryDom, MemoryNode};
    use crate::shared::dom::{DomRoot, Selector};
    use crate::sync::registry::{FilterTrigger, NameSource, RecordShape};

    struct Attendance {
        search: MemoryNode,
        dept: MemoryNode,
        filter: RecordFilter<MemoryNode>,
    }

    fn attendance(dom: &MemoryDom) -> Attendance {
        let root = dom.root();
        let search = root.add("input").with_id("employeeSearch");
        let dept = root.add("select").with_id("departmentFilter").with_value("all");
        let cards = root.add("div").with_id("cardView");
        let table = root.add("table").with_id("tableView");

        for (id, name, department) in [("E1", "Jane Doe", "HR"), ("E2", "John Roe", "Finance")] {
            cards
                .add("div")
                .with_class("employee-card")
                .with_attr("data-emp-id", id)
                .with_attr("data-emp-name", name)
                .with_attr("data-dept", department);
            table
                .add("tr")
                .with_attr("data-emp-id", id)
                .with_attr("data-emp-name", name)
                .with_attr("data-dept", department);
        }

        let filter = RecordFilter::new(FilterBinding {
            listings: vec![
                (cards, Selector::class("employee-card").and_attr("data-emp-id")),
                (table, Selector::tag("tr").and_attr("data-emp-id")),
            ],
            search_input: Some(search.clone()),
            category_select: Some(dept.clone()),
            shape: RecordShape {
                id_attr: Some("data-emp-id"),
                name: NameSource::Attr("data-emp-name"),
                category_attr: Some("data-dept"),
            },
            trigger: FilterTrigger::Input,
        });
        Attendance { search, dept, filter }
    }

    fn visible_ids(dom: &MemoryDom, container: &str) -> Vec<String> {
        dom.by_id(container)
            .unwrap()
            .select_all(&Selector::attr("data-emp-id"))
            .into_iter()
            .filter(|n| n.is_displayed())
            .filter_map(|n| n.attr("data-emp-id"))
            .collect()
    }

    #[test]
    fn test_query_filters_both_views() {
        let dom = MemoryDom::new();
        let page = attendance(&dom);
        page.search.set_value("jane");

        assert_eq!(page.filter.refresh(), 2);
        assert_eq!(visible_ids(&dom, "cardView"), vec!["E1"]);
        assert_eq!(visible_ids(&dom, "tableView"), vec!["E1"]);
    }

    #[test]
    fn test_category_filter() {
        let dom = MemoryDom::new();
        let page = attendance(&dom);
        page.dept.set_value("Finance");

        page.filter.refresh();
        assert_eq!(visible_ids(&dom, "cardView"), vec!["E2"]);
        assert_eq!(visible_ids(&dom, "tableView"), vec!["E2"]);
    }

    #[test]
    fn test_case_insensitive_same_result() {
        let dom = MemoryDom::new();
        let page = attendance(&dom);

        page.search.set_value("JANE");
        page.filter.refresh();
        let upper = visible_ids(&dom, "cardView");

        page.search.set_value("jane");
        page.filter.refresh();
        assert_eq!(visible_ids(&dom, "cardView"), upper);
    }

    #[test]
    fn test_reset_shows_everything() {
        let dom = MemoryDom::new();
        let page = attendance(&dom);
        page.search.set_value("nobody");
        assert_eq!(page.filter.refresh(), 0);

        page.search.set_value("");
        assert_eq!(page.filter.refresh(), 4);
        assert_eq!(visible_ids(&dom, "tableView"), vec!["E1", "E2"]);
    }

    #[test]
    fn test_same_id_gets_same_decision() {
        let dom = MemoryDom::new();
        let page = attendance(&dom);
        // the row carries a stale name; the card still matches
        let row = dom
            .select(&Selector::tag("tr").and_attr_eq("data-emp-id", "E1"))
            .expect("row for E1");
        row.set_attr("data-emp-name", "J. D.");
        page.search.set_value("jane");

        page.filter.refresh();
        assert_eq!(visible_ids(&dom, "tableView"), vec!["E1"]);
    }
}
