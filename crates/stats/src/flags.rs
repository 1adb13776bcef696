//! Checklist and Yes/No radio counts

use intake_core::catalog::{NO, YES};
use intake_core::FormRecord;
use serde::{Deserialize, Serialize};

/// Truthy count of one checklist field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagCount {
    /// Field name
    pub field: String,
    /// Records where the field is truthy
    pub count: usize,
}

/// Yes and No answers for one category of a paired field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YesNoCount {
    /// Base name, e.g. `Agua`
    pub category: String,
    /// Records answering "Si"
    pub yes: usize,
    /// Records answering "No"
    pub no: usize,
}

/// One [`FlagCount`] per field, in the order given
///
/// Fields no record ticked are kept with a zero count.
pub fn count_by_boolean_fields<'a, I, F>(records: I, fields: &[F]) -> Vec<FlagCount>
where
    I: IntoIterator<Item = &'a FormRecord>,
    F: AsRef<str>,
{
    let mut counts: Vec<FlagCount> = fields
        .iter()
        .map(|f| FlagCount {
            field: f.as_ref().to_string(),
            count: 0,
        })
        .collect();
    for record in records {
        for flag in counts.iter_mut() {
            if record.is_set(&flag.field) {
                flag.count += 1;
            }
        }
    }
    counts
}

/// Yes/No counts for fields named by substituting each base into `pattern`
///
/// `pattern` holds one `{}`, e.g. `"tiene{}"` turns `Agua` into `tieneAgua`.
/// Only the exact values "Si" and "No" are counted; anything else, including
/// an absent field, counts toward neither.
pub fn count_by_paired_field<'a, I, B>(records: I, bases: &[B], pattern: &str) -> Vec<YesNoCount>
where
    I: IntoIterator<Item = &'a FormRecord>,
    B: AsRef<str>,
{
    let keys: Vec<String> = bases
        .iter()
        .map(|b| pattern.replacen("{}", b.as_ref(), 1))
        .collect();
    let mut counts: Vec<YesNoCount> = bases
        .iter()
        .map(|b| YesNoCount {
            category: b.as_ref().to_string(),
            yes: 0,
            no: 0,
        })
        .collect();

    for record in records {
        for (key, count) in keys.iter().zip(counts.iter_mut()) {
            match record.get(key).and_then(|v| v.as_str()) {
                Some(YES) => count.yes += 1,
                Some(NO) => count.no += 1,
                _ => {}
            }
        }
    }
    counts
}
