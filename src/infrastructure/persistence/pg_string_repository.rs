//! PostgreSQL implementation of the string repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::analyzer::content_hash;
use crate::domain::entities::{
    AnalyzedProperties, AnalyzedString, CharacterFrequencyMap, NewAnalyzedString,
};
use crate::domain::filter::StringFilter;
use crate::domain::repositories::StringRepository;
use crate::error::AppError;
use serde_json::json;

const SELECT_COLUMNS: &str = "id, value, length, is_palindrome, unique_characters, word_count, \
                              character_frequency_map, created_at";

/// Row shape of the `analyzed_strings` table.
#[derive(Debug, sqlx::FromRow)]
struct AnalyzedStringRow {
    id: String,
    value: String,
    length: i64,
    is_palindrome: bool,
    unique_characters: i64,
    word_count: i64,
    character_frequency_map: Json<CharacterFrequencyMap>,
    created_at: DateTime<Utc>,
}

impl From<AnalyzedStringRow> for AnalyzedString {
    fn from(row: AnalyzedStringRow) -> Self {
        AnalyzedString {
            properties: AnalyzedProperties {
                length: row.length,
                is_palindrome: row.is_palindrome,
                unique_characters: row.unique_characters,
                word_count: row.word_count,
                sha256_hash: row.id.clone(),
                character_frequency_map: row.character_frequency_map.0,
            },
            id: row.id,
            value: row.value,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for analyzed strings.
///
/// `id` is the SHA-256 of `value`, so the primary key alone keeps both unique
/// without indexing the raw text. Inserts use `ON CONFLICT DO NOTHING`, and
/// lookups by value go through the key.
pub struct PgStringRepository {
    pool: Arc<PgPool>,
}

impl PgStringRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Every filter field is bound, with `NULL` meaning "not constrained".
/// `strpos` matches the character literally, so `%` and `_` need no escaping.
const LIST_WHERE: &str = r#"
    WHERE ($1::boolean IS NULL OR is_palindrome = $1)
      AND ($2::bigint IS NULL OR length >= $2)
      AND ($3::bigint IS NULL OR length <= $3)
      AND ($4::bigint IS NULL OR word_count = $4)
      AND ($5::text IS NULL OR strpos(value, $5) > 0)
    ORDER BY created_at, id
"#;

#[async_trait]
impl StringRepository for PgStringRepository {
    async fn insert(&self, new_string: NewAnalyzedString) -> Result<AnalyzedString, AppError> {
        let props = &new_string.properties;

        let row = sqlx::query_as::<_, AnalyzedStringRow>(&format!(
            r#"
            INSERT INTO analyzed_strings
                (id, value, length, is_palindrome, unique_characters, word_count, character_frequency_map)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT DO NOTHING
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(&props.sha256_hash)
        .bind(&new_string.value)
        .bind(props.length)
        .bind(props.is_palindrome)
        .bind(props.unique_characters)
        .bind(props.word_count)
        .bind(Json(&props.character_frequency_map))
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(AnalyzedString::from).ok_or_else(|| {
            AppError::conflict(
                "String already exists",
                json!({ "id": props.sha256_hash }),
            )
        })
    }

    async fn find_by_value(&self, value: &str) -> Result<Option<AnalyzedString>, AppError> {
        let row = sqlx::query_as::<_, AnalyzedStringRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM analyzed_strings WHERE id = $1"
        ))
        .bind(content_hash(value))
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(AnalyzedString::from))
    }

    async fn delete_by_value(&self, value: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM analyzed_strings WHERE id = $1")
            .bind(content_hash(value))
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, filter: StringFilter) -> Result<Vec<AnalyzedString>, AppError> {
        let rows = sqlx::query_as::<_, AnalyzedStringRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM analyzed_strings {LIST_WHERE}"
        ))
        .bind(filter.is_palindrome)
        .bind(filter.min_length)
        .bind(filter.max_length)
        .bind(filter.word_count)
        .bind(filter.contains_character.map(String::from))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(AnalyzedString::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM analyzed_strings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
