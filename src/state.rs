//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::StringService;
use crate::domain::repositories::StringRepository;

#[derive(Clone)]
pub struct AppState {
    pub string_service: Arc<StringService>,
}

impl AppState {
    /// Builds the state around a concrete store.
    pub fn new(repository: Arc<dyn StringRepository>) -> Self {
        Self {
            string_service: Arc::new(StringService::new(repository)),
        }
    }
}
