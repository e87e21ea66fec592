//! Business logic services for the application layer.

pub mod string_service;

pub use string_service::{FilteredStrings, StringService};
