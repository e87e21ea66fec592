//! String analysis, storage and query service.

use std::sync::Arc;

use crate::domain::entities::{AnalyzedString, NewAnalyzedString};
use crate::domain::filter::StringFilter;
use crate::domain::nl_query::parse_query;
use crate::domain::repositories::StringRepository;
use crate::error::AppError;
use serde_json::json;
use tracing::{info, warn};

/// Records matching a filter, together with the filter that produced them.
#[derive(Debug, Clone)]
pub struct FilteredStrings {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub filters_applied: StringFilter,
}

/// Service for analyzing, storing and querying strings.
///
/// Holds the store as an injected trait object so the same service runs over
/// PostgreSQL in production and over the in-memory store in tests.
pub struct StringService {
    repository: Arc<dyn StringRepository>,
}

impl StringService {
    /// Creates a new string service.
    pub fn new(repository: Arc<dyn StringRepository>) -> Self {
        Self { repository }
    }

    /// Analyzes and stores a new string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the value is empty or only whitespace.
    /// Returns [`AppError::Conflict`] if the value is already stored.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_string(&self, value: String) -> Result<AnalyzedString, AppError> {
        if value.trim().is_empty() {
            return Err(AppError::bad_request("value cannot be empty", json!({})));
        }

        let new_string = NewAnalyzedString::analyze(value);
        let id = new_string.id().to_string();

        match self.repository.insert(new_string).await {
            Ok(record) => {
                info!(id = %record.id, length = record.properties.length, "String stored");
                Ok(record)
            }
            Err(err @ AppError::Conflict { .. }) => {
                warn!(%id, "Rejected duplicate string");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Retrieves a stored string by exact value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this value.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_string(&self, value: &str) -> Result<AnalyzedString, AppError> {
        self.repository
            .find_by_value(value)
            .await?
            .ok_or_else(|| AppError::not_found("String not found", json!({ "value": value })))
    }

    /// Deletes a stored string by exact value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this value.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_string(&self, value: &str) -> Result<(), AppError> {
        if !self.repository.delete_by_value(value).await? {
            return Err(AppError::not_found(
                "String not found",
                json!({ "value": value }),
            ));
        }

        info!(value_len = value.chars().count(), "String deleted");
        Ok(())
    }

    /// Lists stored strings matching a structured filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unprocessable`] if `min_length` exceeds `max_length`.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_strings(&self, filter: StringFilter) -> Result<FilteredStrings, AppError> {
        if let Some((min_length, max_length)) = filter.conflicting_length_bounds() {
            return Err(AppError::unprocessable(
                "Conflicting filters",
                json!({ "min_length": min_length, "max_length": max_length }),
            ));
        }

        let data = self.repository.list(filter.clone()).await?;

        Ok(FilteredStrings {
            count: data.len(),
            data,
            filters_applied: filter,
        })
    }

    /// Interprets a natural-language query and lists the matching strings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the query cannot be parsed.
    /// Returns [`AppError::Unprocessable`] if the derived filters conflict.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn query_natural_language(&self, query: &str) -> Result<FilteredStrings, AppError> {
        let filter = parse_query(query).inspect_err(|e| {
            warn!(error = %e, "Rejected natural language query");
        })?;

        self.list_strings(filter).await
    }

    /// Total number of stored strings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_strings(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
