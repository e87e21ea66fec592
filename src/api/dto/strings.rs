//! DTOs for the `/strings` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::{Validate, ValidationError};

use crate::application::services::FilteredStrings;
use crate::domain::entities::{AnalyzedProperties, AnalyzedString, CharacterFrequencyMap};
use crate::domain::filter::StringFilter;

/// Rejects U+0000, which PostgreSQL `TEXT` and `JSONB` cannot store.
fn reject_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_character"));
    }
    Ok(())
}

/// Request body for `POST /strings`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStringRequest {
    #[validate(custom(
        function = "reject_nul",
        message = "value must not contain NUL characters"
    ))]
    pub value: String,
}

/// A stored string as returned by the API.
#[derive(Debug, Serialize)]
pub struct StringResponse {
    pub id: String,
    pub value: String,
    pub properties: PropertiesResponse,
    pub created_at: DateTime<Utc>,
}

/// Computed properties of a stored string.
#[derive(Debug, Serialize)]
pub struct PropertiesResponse {
    pub length: i64,
    pub is_palindrome: bool,
    pub unique_characters: i64,
    pub word_count: i64,
    pub sha256_hash: String,
    pub character_frequency_map: CharacterFrequencyMap,
}

impl From<AnalyzedProperties> for PropertiesResponse {
    fn from(props: AnalyzedProperties) -> Self {
        Self {
            length: props.length,
            is_palindrome: props.is_palindrome,
            unique_characters: props.unique_characters,
            word_count: props.word_count,
            sha256_hash: props.sha256_hash,
            character_frequency_map: props.character_frequency_map,
        }
    }
}

impl From<AnalyzedString> for StringResponse {
    fn from(record: AnalyzedString) -> Self {
        Self {
            id: record.id,
            value: record.value,
            properties: record.properties.into(),
            created_at: record.created_at,
        }
    }
}

/// Query parameters for `GET /strings`.
///
/// Negative numbers parse but fail validation, so both paths end in 422.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListStringsParams {
    #[serde(default, with = "flexible_bool")]
    pub is_palindrome: Option<bool>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 0, message = "min_length must be non-negative"))]
    pub min_length: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 0, message = "max_length must be non-negative"))]
    pub max_length: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 0, message = "word_count must be non-negative"))]
    pub word_count: Option<i64>,

    #[validate(
        length(equal = 1, message = "contains_character must be exactly one character"),
        custom(function = "reject_nul", message = "contains_character must not be NUL")
    )]
    pub contains_character: Option<String>,
}

impl ListStringsParams {
    /// Converts validated parameters into a structured filter.
    pub fn into_filter(self) -> StringFilter {
        StringFilter::new()
            .with_palindrome(self.is_palindrome)
            .with_length_range(self.min_length, self.max_length)
            .with_word_count(self.word_count)
            .with_character(self.contains_character.and_then(|s| s.chars().next()))
    }
}

/// Query-string booleans: `true/false`, `1/0`, `yes/no`, `on/off`, `t/f`, `y/n`.
mod flexible_bool {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            None => Ok(None),
            Some(s) => match s.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" | "t" | "y" => Ok(Some(true)),
                "false" | "0" | "no" | "off" | "f" | "n" => Ok(Some(false)),
                other => Err(serde::de::Error::custom(format!(
                    "invalid boolean '{other}'"
                ))),
            },
        }
    }
}

/// Response for `GET /strings`.
#[derive(Debug, Serialize)]
pub struct StringListResponse {
    pub data: Vec<StringResponse>,
    pub count: usize,
    pub filters_applied: StringFilter,
}

impl From<FilteredStrings> for StringListResponse {
    fn from(result: FilteredStrings) -> Self {
        Self {
            data: result.data.into_iter().map(StringResponse::from).collect(),
            count: result.count,
            filters_applied: result.filters_applied,
        }
    }
}

/// Query parameters for `GET /strings/filter-by-natural-language`.
#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: String,
}

/// Response for `GET /strings/filter-by-natural-language`.
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringResponse>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// The original query and the filters derived from it.
#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: StringFilter,
}

impl NaturalLanguageResponse {
    pub fn new(original: String, result: FilteredStrings) -> Self {
        Self {
            data: result.data.into_iter().map(StringResponse::from).collect(),
            count: result.count,
            interpreted_query: InterpretedQuery {
                original,
                parsed_filters: result.filters_applied,
            },
        }
    }
}
