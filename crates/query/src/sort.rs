//! Multi-key sorting of the response table
//!
//! Sorting is stable in both directions: records with equal keys keep their
//! relative input order. Descending reverses the comparison, never the
//! output, which is what keeps ties in place.

use chrono::{DateTime, Utc};
use intake_core::{FieldSchema, FormRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Column the table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Creation time, compared chronologically
    SubmittedAt,
    /// Given name followed by family name
    FullName,
    /// National identity number
    NationalId,
    /// Housing type
    HousingType,
    /// Assistance modality
    Modality,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    /// The other direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Time(DateTime<Utc>),
    Text(String),
}

fn sort_value(record: &FormRecord, schema: &FieldSchema, key: SortKey) -> SortValue {
    let text = |field: &str| record.text(field).to_lowercase();
    match key {
        SortKey::SubmittedAt => SortValue::Time(record.submitted_at),
        SortKey::FullName => SortValue::Text(format!(
            "{} {}",
            text(&schema.given_name),
            text(&schema.family_name)
        )),
        SortKey::NationalId => SortValue::Text(text(&schema.national_id)),
        SortKey::HousingType => SortValue::Text(text(&schema.housing_type)),
        SortKey::Modality => SortValue::Text(text(&schema.modality)),
    }
}

/// Stable sort by one column
///
/// Text columns compare case-insensitively; unspecified values read as the
/// empty string and so sort first when ascending.
pub fn sort_by<'a, I>(
    records: I,
    schema: &FieldSchema,
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a FormRecord>
where
    I: IntoIterator<Item = &'a FormRecord>,
{
    let mut keyed: Vec<(SortValue, &'a FormRecord)> = records
        .into_iter()
        .map(|record| (sort_value(record, schema, key), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp(b)));
    keyed.into_iter().map(|(_, record)| record).collect()
}
