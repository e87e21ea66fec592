#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use sqlx::PgPool;
use std::sync::Arc;
use string_analyzer::api::handlers::{health_handler, root_handler};
use string_analyzer::api::routes::string_routes;
use string_analyzer::domain::entities::{AnalyzedString, NewAnalyzedString};
use string_analyzer::domain::repositories::StringRepository;
use string_analyzer::infrastructure::persistence::{InMemoryStringRepository, PgStringRepository};
use string_analyzer::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryStringRepository::new()))
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgStringRepository::new(Arc::new(pool))))
}

/// Full API surface over a fresh in-memory store.
pub fn create_test_app() -> Router {
    create_app(create_test_state())
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(string_routes())
        .with_state(state)
}

pub async fn insert_test_string(repo: &dyn StringRepository, value: &str) -> AnalyzedString {
    repo.insert(NewAnalyzedString::analyze(value)).await.unwrap()
}
