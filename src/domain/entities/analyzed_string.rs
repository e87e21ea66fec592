//! Analyzed string entity.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::domain::analyzer::compute_properties;

/// Occurrence count per character, case-sensitive.
pub type CharacterFrequencyMap = BTreeMap<char, i64>;

/// Properties derived from a raw string by [`compute_properties`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedProperties {
    /// Number of Unicode code points.
    pub length: i64,
    pub is_palindrome: bool,
    /// Number of distinct code points, case-sensitive.
    pub unique_characters: i64,
    pub word_count: i64,
    /// Lowercase hex SHA-256 of the UTF-8 bytes. Doubles as the record id.
    pub sha256_hash: String,
    pub character_frequency_map: CharacterFrequencyMap,
}

/// A stored string with its computed properties.
///
/// Records are immutable once stored; `id` always equals
/// `properties.sha256_hash`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedString {
    pub id: String,
    pub value: String,
    pub properties: AnalyzedProperties,
    pub created_at: DateTime<Utc>,
}

impl AnalyzedString {
    /// Creates a record from a value and its properties.
    ///
    /// The id is taken from the properties' content hash.
    pub fn new(value: String, properties: AnalyzedProperties, created_at: DateTime<Utc>) -> Self {
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at,
        }
    }
}

/// Input data for inserting a new analyzed string.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalyzedString {
    pub value: String,
    pub properties: AnalyzedProperties,
}

impl NewAnalyzedString {
    /// Analyzes `value` and wraps it for insertion.
    pub fn analyze(value: impl Into<String>) -> Self {
        let value = value.into();
        let properties = compute_properties(&value);
        Self { value, properties }
    }

    /// Content hash used as the primary key.
    pub fn id(&self) -> &str {
        &self.properties.sha256_hash
    }

    /// Turns the pending record into a stored one.
    pub fn into_stored(self, created_at: DateTime<Utc>) -> AnalyzedString {
        AnalyzedString::new(self.value, self.properties, created_at)
    }
}
