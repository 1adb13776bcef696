//! Form engine for intake
//!
//! This crate owns all mutable state of the intake application:
//! - FormRepository: saved forms plus the current draft, write-through to a store
//! - ChangeEvent / SubscriptionId: change notification for views
//! - IntakeConfig: settings loaded from `intake.toml`
//!
//! The repository is the only component that writes to storage. Views and
//! statistics read its forms through plain slices.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod observer;
pub mod repository;

pub use config::{IntakeConfig, CONFIG_FILE_NAME};
pub use observer::{ChangeEvent, SubscriptionId};
pub use repository::{FormRepository, RepositoryOptions};
