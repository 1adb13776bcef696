//! Submissions per calendar month

use chrono::Datelike;
use intake_core::FormRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Spanish name of a 1-based month, `None` outside 1..=12
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Records created in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Calendar year
    pub year: i32,
    /// 1-based month
    pub month: u32,
    /// Display label, e.g. `Marzo 2024`
    pub label: String,
    /// Records in the month
    pub count: usize,
}

/// Count records per UTC calendar month of `submitted_at`
///
/// Buckets come back in chronological order. Months with no records are
/// not emitted.
pub fn monthly_histogram<'a, I>(records: I) -> Vec<MonthBucket>
where
    I: IntoIterator<Item = &'a FormRecord>,
{
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in records {
        let at = record.submitted_at;
        *months.entry((at.year(), at.month())).or_insert(0) += 1;
    }
    months
        .into_iter()
        .map(|((year, month), count)| MonthBucket {
            year,
            month,
            label: format!("{} {}", month_name(month).unwrap_or_default(), year),
            count,
        })
        .collect()
}
