//! Shared wiring for the runnable demos.
pub mod common;
