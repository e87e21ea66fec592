//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`StringRepository`] - Analyzed string storage, lookup and filtering

pub mod string_repository;

pub use string_repository::StringRepository;

#[cfg(test)]
pub use string_repository::MockStringRepository;
