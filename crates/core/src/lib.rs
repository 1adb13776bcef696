//! Core types for intake
//!
//! This crate defines the foundational types used throughout the system:
//! - FieldValue: JSON-compatible value held by a form field
//! - FormId: Opaque identity of a form record
//! - FormRecord: One saved or in-progress intake form
//! - Error / StoreError: Error type hierarchy
//! - catalog: Known field names and labels of the intake form

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod types;
pub mod value;

pub use catalog::FieldSchema;
pub use error::{Error, Result, StoreError};
pub use types::{Fields, FormId, FormRecord};
pub use value::FieldValue;
