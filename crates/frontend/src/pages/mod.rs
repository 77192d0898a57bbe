//! Dashboard pages.
//!
//! [`catalog`] lists the card/table pages declaratively; the remaining
//! modules hold the smaller page-specific widgets.

pub mod chrome;
pub mod department;
pub mod leave;
pub mod messages;
pub mod payroll;

use crate::shared::dom::Selector;
use crate::sync::registry::{
    ActionDescriptor, FilterDescriptor, FilterTrigger, HideStyle, NameSource, PageDescriptor,
    RecordListing, RecordShape, RecordStateDescriptor, ViewControls, ViewDescriptor,
};

pub const FINANCE_VIEW_KEY: &str = "finance_view";

/// Every card/table page of the dashboard. Descriptors whose markup is absent
/// from the current document resolve to nothing.
pub fn catalog() -> Vec<PageDescriptor> {
    vec![
        employee_directory(),
        finance_requests(),
        attendance(),
        departments(),
        payroll(),
    ]
}

pub fn employee_directory() -> PageDescriptor {
    PageDescriptor {
        name: "employees",
        view: Some(ViewDescriptor {
            card_container: "employeeCards",
            table_container: "employeeTable",
            controls: ViewControls::Pair {
                card: "gridViewBtn",
                table: "tableViewBtn",
            },
            hide: HideStyle::Display,
            persistence_key: None,
            keyboard: false,
        }),
        filter: None,
        records: None,
        actions: None,
    }
}

pub fn finance_requests() -> PageDescriptor {
    PageDescriptor {
        name: "finance_requests",
        view: Some(ViewDescriptor {
            card_container: "requestCards",
            table_container: "requestTable",
            controls: ViewControls::Pair {
                card: "reqCardViewBtn",
                table: "reqTableViewBtn",
            },
            hide: HideStyle::Display,
            persistence_key: Some(FINANCE_VIEW_KEY),
            keyboard: false,
        }),
        filter: None,
        records: None,
        actions: Some(ActionDescriptor {
            id_attr: "data-request-id",
            trigger: Selector::class("ajax-action"),
        }),
    }
}

pub fn attendance() -> PageDescriptor {
    PageDescriptor {
        name: "attendance",
        view: Some(ViewDescriptor {
            card_container: "cardView",
            table_container: "tableView",
            controls: ViewControls::Pair {
                card: "cardViewBtn",
                table: "tableViewBtn",
            },
            hide: HideStyle::HiddenClass,
            persistence_key: None,
            keyboard: true,
        }),
        filter: Some(FilterDescriptor {
            listings: vec![
                RecordListing {
                    container: "cardView",
                    item: Selector::class("employee-card").and_attr("data-emp-id"),
                },
                RecordListing {
                    container: "tableView",
                    item: Selector::tag("tr").and_attr("data-emp-id"),
                },
            ],
            search_input: Some("employeeSearch"),
            category_select: Some("departmentFilter"),
            shape: RecordShape {
                id_attr: Some("data-emp-id"),
                name: NameSource::Attr("data-emp-name"),
                category_attr: Some("data-dept"),
            },
            trigger: FilterTrigger::Input,
        }),
        records: Some(RecordStateDescriptor {
            id_attr: "data-emp-id",
        }),
        actions: None,
    }
}

pub fn departments() -> PageDescriptor {
    PageDescriptor {
        name: "departments",
        view: Some(ViewDescriptor {
            card_container: "cardView",
            table_container: "tableView",
            controls: ViewControls::Single {
                toggle: "deptToggleBtn",
            },
            hide: HideStyle::HiddenClass,
            persistence_key: None,
            keyboard: false,
        }),
        filter: None,
        records: None,
        actions: None,
    }
}

pub fn payroll() -> PageDescriptor {
    PageDescriptor {
        name: "payroll",
        view: None,
        filter: Some(FilterDescriptor {
            listings: vec![RecordListing {
                container: "payrollBody",
                item: Selector::tag("tr"),
            }],
            search_input: Some("searchPayroll"),
            category_select: None,
            shape: RecordShape {
                id_attr: None,
                name: NameSource::FirstCell,
                category_attr: None,
            },
            trigger: FilterTrigger::KeyUp,
        }),
        records: None,
        actions: None,
    }
}
