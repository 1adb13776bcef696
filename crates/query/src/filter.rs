//! Free-text search and category filtering
//!
//! Both functions keep the input order and return borrowed records, so they
//! can be chained without cloning.

use intake_core::{FieldSchema, FormRecord};
use serde::{Deserialize, Serialize};

/// Case-insensitive substring search over name, family name and national id
///
/// An empty term matches everything. Unspecified fields read as the empty
/// string.
pub fn search<'a, I>(records: I, schema: &FieldSchema, term: &str) -> Vec<&'a FormRecord>
where
    I: IntoIterator<Item = &'a FormRecord>,
{
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return records.into_iter().collect();
    }
    let fields = schema.search_fields();
    records
        .into_iter()
        .filter(|record| {
            fields
                .iter()
                .any(|field| record.text(field).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Category selection of the housing-type dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Pass every record
    #[default]
    All,
    /// Keep records whose field equals this value exactly
    Only(String),
}

impl CategoryFilter {
    /// Dropdown value meaning "every type"
    pub const ALL_SENTINEL: &'static str = "all";

    /// Whether `record` passes this filter on `field`
    pub fn matches(&self, record: &FormRecord, field: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(value) => record.text(field) == *value,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == Self::ALL_SENTINEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::from(value.as_str())
    }
}

/// Exact-match filter on one field
pub fn filter_by_category<'a, I>(
    records: I,
    field: &str,
    filter: &CategoryFilter,
) -> Vec<&'a FormRecord>
where
    I: IntoIterator<Item = &'a FormRecord>,
{
    records
        .into_iter()
        .filter(|record| filter.matches(record, field))
        .collect()
}
