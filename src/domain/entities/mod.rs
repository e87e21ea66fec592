//! Core domain entities.
//!
//! - [`AnalyzedString`] - A stored string together with its computed properties
//! - [`AnalyzedProperties`] - The properties derived from a raw string
//! - [`NewAnalyzedString`] - Input for inserting a freshly analyzed string
//!
//! Entities are plain data; the analysis itself lives in [`crate::domain::analyzer`].

pub mod analyzed_string;

pub use analyzed_string::{AnalyzedProperties, AnalyzedString, CharacterFrequencyMap, NewAnalyzedString};
