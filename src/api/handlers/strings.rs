//! Handlers for the `/strings` endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::strings::{
    CreateStringRequest, ListStringsParams, NaturalLanguageParams, NaturalLanguageResponse,
    StringListResponse, StringResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Maps a body extraction failure onto the API error shape.
///
/// Type errors (e.g. `value` is a number or missing) keep Axum's 422; malformed
/// JSON and wrong content types become 400.
fn json_rejection(rejection: JsonRejection) -> AppError {
    let reason = rejection.body_text();
    if rejection.status() == StatusCode::UNPROCESSABLE_ENTITY {
        AppError::unprocessable("value must be a string", json!({ "reason": reason }))
    } else {
        AppError::bad_request("Invalid request body", json!({ "reason": reason }))
    }
}

fn query_rejection(rejection: QueryRejection) -> AppError {
    AppError::unprocessable(
        "Invalid query parameters",
        json!({ "reason": rejection.body_text() }),
    )
}

/// Analyzes and stores a new string.
///
/// # Endpoint
///
/// `POST /strings`
///
/// # Request Body
///
/// ```json
/// { "value": "A man, a plan, a canal: Panama" }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record:
///
/// ```json
/// {
///   "id": "<sha256>",
///   "value": "A man, a plan, a canal: Panama",
///   "properties": {
///     "length": 30,
///     "is_palindrome": true,
///     "unique_characters": 11,
///     "word_count": 7,
///     "sha256_hash": "<sha256>",
///     "character_frequency_map": { " ": 6, ",": 2, "A": 1, ... }
///   },
///   "created_at": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 if `value` is empty or whitespace, or the body is not JSON
/// - 422 if `value` is missing, not a string, or contains NUL
/// - 409 if the string is already stored
pub async fn create_string_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateStringRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StringResponse>), AppError> {
    let Json(payload) = payload.map_err(json_rejection)?;
    payload.validate()?;

    let record = state.string_service.create_string(payload.value).await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Retrieves a stored string by its exact value.
///
/// # Endpoint
///
/// `GET /strings/{value}`
///
/// The value is percent-decoded from the path, so clients must URL-encode it.
///
/// # Errors
///
/// Returns 404 Not Found if the string is not stored.
pub async fn get_string_handler(
    Path(value): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StringResponse>, AppError> {
    let record = state.string_service.get_string(&value).await?;

    Ok(Json(record.into()))
}

/// Lists stored strings matching the given filters.
///
/// # Endpoint
///
/// `GET /strings`
///
/// # Query Parameters
///
/// - `is_palindrome` (optional): `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`
/// - `min_length` / `max_length` (optional): inclusive length bounds
/// - `word_count` (optional): exact word count
/// - `contains_character` (optional): exactly one character
///
/// # Response
///
/// ```json
/// { "data": [ ... ], "count": 2, "filters_applied": { "min_length": 5 } }
/// ```
///
/// # Errors
///
/// Returns 422 if a parameter is malformed or negative, `contains_character`
/// is not a single non-NUL character, or `min_length > max_length`.
pub async fn list_strings_handler(
    State(state): State<AppState>,
    params: Result<Query<ListStringsParams>, QueryRejection>,
) -> Result<Json<StringListResponse>, AppError> {
    let Query(params) = params.map_err(query_rejection)?;
    params.validate()?;

    let result = state.string_service.list_strings(params.into_filter()).await?;

    Ok(Json(result.into()))
}

/// Lists stored strings matching a natural-language query.
///
/// # Endpoint
///
/// `GET /strings/filter-by-natural-language?query=...`
///
/// # Response
///
/// ```json
/// {
///   "data": [ ... ],
///   "count": 1,
///   "interpreted_query": {
///     "original": "single word palindromic strings",
///     "parsed_filters": { "is_palindrome": true, "word_count": 1 }
///   }
/// }
/// ```
///
/// # Errors
///
/// - 400 if the query cannot be parsed
/// - 422 if the derived filters conflict or `query` is missing
pub async fn natural_language_handler(
    State(state): State<AppState>,
    params: Result<Query<NaturalLanguageParams>, QueryRejection>,
) -> Result<Json<NaturalLanguageResponse>, AppError> {
    let Query(params) = params.map_err(query_rejection)?;

    let result = state
        .string_service
        .query_natural_language(&params.query)
        .await?;

    Ok(Json(NaturalLanguageResponse::new(params.query, result)))
}

/// Deletes a stored string by its exact value.
///
/// # Endpoint
///
/// `DELETE /strings/{value}`
///
/// # Errors
///
/// Returns 404 Not Found if the string is not stored.
pub async fn delete_string_handler(
    Path(value): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.string_service.delete_string(&value).await?;

    Ok(StatusCode::NO_CONTENT)
}
