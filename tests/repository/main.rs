#[path = "../common/mod.rs"]
mod common;

mod failures;
mod persistence;
mod properties;
mod scenarios;
