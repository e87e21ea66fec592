//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod strings;

pub use health::{health_handler, root_handler};
pub use strings::{
    create_string_handler, delete_string_handler, get_string_handler, list_strings_handler,
    natural_language_handler,
};
