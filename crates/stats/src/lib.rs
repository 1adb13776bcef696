//! Statistics over saved intake forms
//!
//! Every aggregate here takes the full, unfiltered collection and is total:
//! an empty collection yields empty or zeroed results, never an error. The
//! statistics screen decides whether to show its "no data" state from
//! [`StatisticsReport::is_empty`] alone.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod flags;
pub mod monthly;
pub mod report;

pub use category::{count_by_category, CategoryCount, CategoryCounts};
pub use flags::{count_by_boolean_fields, count_by_paired_field, FlagCount, YesNoCount};
pub use monthly::{month_name, monthly_histogram, MonthBucket};
pub use report::StatisticsReport;
