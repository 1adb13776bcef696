//! Query and view layer for intake
//!
//! Pure functions over a slice of saved forms. Nothing here mutates or
//! persists; every function is total over any collection, including the
//! empty one.
//!
//! The response table composes them in a fixed order:
//! search → category filter → sort → paginate. [`ResponseQuery`] holds that
//! table state and runs the pipeline.
//!
//! # Example
//!
//! ```
//! use intake_core::{FieldSchema, FormRecord};
//! use intake_query::{search, sort_by, paginate, SortDirection, SortKey};
//!
//! let forms = vec![
//!     FormRecord::new().with_field("nombre", "Juan").with_field("apellido", "Perez"),
//!     FormRecord::new().with_field("nombre", "Ana").with_field("apellido", "Soto"),
//! ];
//! let schema = FieldSchema::default();
//! let hits = search(&forms, &schema, "an");
//! let sorted = sort_by(hits, &schema, SortKey::FullName, SortDirection::Ascending);
//! assert_eq!(paginate(&sorted, 1, 1)[0].text("nombre"), "Ana");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod detail;
pub mod filter;
pub mod page;
pub mod sort;
pub mod table;

pub use detail::{format_timestamp, FormDetail};
pub use filter::{filter_by_category, search, CategoryFilter};
pub use page::{page_count, paginate};
pub use sort::{sort_by, SortDirection, SortKey};
pub use table::{EmptyState, ResponsePage, ResponseQuery, DEFAULT_PAGE_SIZE};
