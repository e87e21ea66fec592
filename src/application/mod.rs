//! Application layer services implementing business logic.
//!
//! Services coordinate the analyzer, the filter translator and the repository,
//! and give HTTP handlers and the admin CLI a single API.
//!
//! # Available Services
//!
//! - [`services::string_service::StringService`] - String creation, lookup, deletion and querying

pub mod services;
