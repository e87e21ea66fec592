//! API route configuration.

use crate::api::handlers::{
    create_string_handler, delete_string_handler, get_string_handler, list_strings_handler,
    natural_language_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// String analysis routes.
///
/// # Endpoints
///
/// - `POST   /strings`                              - Analyze and store a string
/// - `GET    /strings`                              - List strings matching structured filters
/// - `GET    /strings/filter-by-natural-language`   - List strings matching a natural-language query
/// - `GET    /strings/{value}`                      - Fetch a stored string by value
/// - `DELETE /strings/{value}`                      - Delete a stored string by value
///
/// The static `filter-by-natural-language` segment takes priority over the
/// `{value}` capture.
pub fn string_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/strings",
            get(list_strings_handler).post(create_string_handler),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(natural_language_handler),
        )
        .route(
            "/strings/{value}",
            get(get_string_handler).delete(delete_string_handler),
        )
}
