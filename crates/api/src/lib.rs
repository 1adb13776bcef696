//! Public API for intake
//!
//! [`Intake`] ties the form repository to its store, its configuration and
//! the read-only views built over it. Applications hold one `Intake` and go
//! through it for every operation.
//!
//! # Example
//!
//! ```
//! use intake_api::Intake;
//! use intake_core::FieldValue;
//!
//! let mut intake = Intake::ephemeral()?;
//! intake.update_current_draft([("nombre", FieldValue::from("Ana"))])?;
//! let id = intake.save_current_draft()?;
//!
//! let page = intake.responses(&intake.new_query());
//! assert_eq!(page.total, 1);
//! assert!(intake.detail(&id).is_some());
//! # Ok::<(), intake_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod intake;

pub use intake::Intake;
