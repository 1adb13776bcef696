//! Intake - form data store for the Santa Rosa housing assistance office
//!
//! Intake keeps the forms collected at the front desk: a collection of saved
//! forms plus the one draft being edited, written through to local storage
//! on every change. Read-only views (search, filter, sort, pagination, the
//! per-form detail) and statistics are computed from the saved forms.
//!
//! # Quick Start
//!
//! ```
//! use intake::{Intake, ResponseQuery};
//!
//! let mut intake = Intake::ephemeral()?;
//! intake.update_current_draft([("nombre", "Ana"), ("dni", "111")])?;
//! intake.save_current_draft()?;
//!
//! let mut query = ResponseQuery::default();
//! query.set_term("an");
//! assert_eq!(intake.responses(&query).total_filtered, 1);
//! assert_eq!(intake.statistics().total, 1);
//! # Ok::<(), intake::Error>(())
//! ```
//!
//! # Architecture
//!
//! The [`Intake`] facade is the entry point. The crates behind it are
//! re-exported for callers that need a narrower piece, such as the pure
//! view functions or a custom [`KeyValueStore`].

pub use intake_api::Intake;
pub use intake_core::{
    catalog, Error, FieldSchema, FieldValue, Fields, FormId, FormRecord, Result, StoreError,
};
pub use intake_engine::{
    ChangeEvent, FormRepository, IntakeConfig, RepositoryOptions, SubscriptionId,
    CONFIG_FILE_NAME,
};
pub use intake_query::{
    filter_by_category, format_timestamp, page_count, paginate, search, sort_by, CategoryFilter,
    EmptyState, FormDetail, ResponsePage, ResponseQuery, SortDirection, SortKey,
};
pub use intake_stats::{
    count_by_boolean_fields, count_by_category, count_by_paired_field, monthly_histogram,
    CategoryCounts, FlagCount, MonthBucket, StatisticsReport, YesNoCount,
};
pub use intake_storage::{testing, FileStore, KeyValueStore, MemoryStore};
