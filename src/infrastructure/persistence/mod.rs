//! Repository implementations.
//!
//! - [`PgStringRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryStringRepository`] - Process-local storage for tests and local runs

pub mod memory_string_repository;
pub mod pg_string_repository;

pub use memory_string_repository::InMemoryStringRepository;
pub use pg_string_repository::PgStringRepository;
