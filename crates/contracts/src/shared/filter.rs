//! Search/category filter applied to a page's record set.

use serde::{Deserialize, Serialize};

/// Category selector value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_select(value: &str) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn admits(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// The searchable fields of one record representation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordFields {
    pub id: String,
    pub name: String,
    pub category: String,
}

impl RecordFields {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
        }
    }
}

/// Current search text and category selection.
///
/// The query is stored trimmed and lowercased so matching is a plain
/// substring test.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    query: String,
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn new(query: &str, category: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            category: CategoryFilter::from_select(category),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// True for the reset state where every record is shown.
    pub fn is_pass_through(&self) -> bool {
        self.query.is_empty() && self.category == CategoryFilter::All
    }

    pub fn matches(&self, record: &RecordFields) -> bool {
        self.matches_query(record) && self.category.admits(&record.category)
    }

    fn matches_query(&self, record: &RecordFields) -> bool {
        self.query.is_empty()
            || record.name.to_lowercase().contains(&self.query)
            || record.id.to_lowercase().contains(&self.query)
    }
}
