//! Distinct-value counts of one field

use intake_core::catalog::UNSPECIFIED;
use intake_core::FormRecord;
use serde::{Deserialize, Serialize};

/// One bucket of a category count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Observed value, or "No especificado"
    pub label: String,
    /// Records holding it
    pub count: usize,
}

/// Buckets of a category count, in the order values were first seen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    buckets: Vec<CategoryCount>,
}

impl CategoryCounts {
    /// All buckets
    pub fn buckets(&self) -> &[CategoryCount] {
        &self.buckets
    }

    /// Count for `label`, zero when never seen
    pub fn get(&self, label: &str) -> usize {
        self.buckets
            .iter()
            .find(|b| b.label == label)
            .map_or(0, |b| b.count)
    }

    /// Number of distinct buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no record was counted
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum over all buckets
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    fn add(&mut self, label: String) {
        match self.buckets.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.count += 1,
            None => self.buckets.push(CategoryCount { label, count: 1 }),
        }
    }
}

/// Count records by the text of `field`
///
/// Falsy values (absent, null, `false`, `0`, `""`) all land in the
/// "No especificado" bucket. Whitespace is a value like any other.
pub fn count_by_category<'a, I>(records: I, field: &str) -> CategoryCounts
where
    I: IntoIterator<Item = &'a FormRecord>,
{
    let mut counts = CategoryCounts::default();
    for record in records {
        if record.is_set(field) {
            counts.add(record.text(field));
        } else {
            counts.add(UNSPECIFIED.to_string());
        }
    }
    counts
}
