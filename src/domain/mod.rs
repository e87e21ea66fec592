//! Domain layer containing business entities and logic.
//!
//! Everything here is independent of HTTP and of the concrete store.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`analyzer`] - Pure property computation for raw strings
//! - [`filter`] - Structured filter and its in-process evaluation
//! - [`nl_query`] - Heuristic natural-language to filter translation
//! - [`repositories`] - Storage trait definitions
//!
//! # Request Flow
//!
//! 1. A new value is analyzed by [`analyzer::compute_properties`]
//! 2. The result is stored through [`repositories::StringRepository`]
//! 3. Queries arrive as a [`filter::StringFilter`], either directly from
//!    query parameters or translated by [`nl_query::parse_query`]

pub mod analyzer;
pub mod entities;
pub mod filter;
pub mod nl_query;
pub mod repositories;
