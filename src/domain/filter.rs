//! Structured filter over stored strings.
//!
//! Every populated field is an independent AND predicate; `None` fields impose
//! no constraint. The same filter is echoed back to API callers as
//! `filters_applied`, so it serializes with absent fields omitted.

use serde::Serialize;

use crate::domain::entities::AnalyzedString;

/// Conjunctive filter criteria for listing stored strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StringFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl StringFilter {
    /// Creates a filter that matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palindrome(mut self, is_palindrome: Option<bool>) -> Self {
        self.is_palindrome = is_palindrome;
        self
    }

    pub fn with_length_range(mut self, min_length: Option<i64>, max_length: Option<i64>) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    pub fn with_word_count(mut self, word_count: Option<i64>) -> Self {
        self.word_count = word_count;
        self
    }

    pub fn with_character(mut self, contains_character: Option<char>) -> Self {
        self.contains_character = contains_character;
        self
    }

    /// Returns true when no predicate is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the `(min, max)` pair when the length bounds cannot both hold.
    pub fn conflicting_length_bounds(&self) -> Option<(i64, i64)> {
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) if min > max => Some((min, max)),
            _ => None,
        }
    }

    /// Evaluates the filter against a single record.
    pub fn matches(&self, record: &AnalyzedString) -> bool {
        let props = &record.properties;

        self.is_palindrome.is_none_or(|p| props.is_palindrome == p)
            && self.min_length.is_none_or(|min| props.length >= min)
            && self.max_length.is_none_or(|max| props.length <= max)
            && self.word_count.is_none_or(|wc| props.word_count == wc)
            && self
                .contains_character
                .is_none_or(|c| record.value.contains(c))
    }
}
