//! String property computation.
//!
//! [`compute_properties`] is pure and total: it never fails and returns the
//! same result for the same input. Rejecting empty values is the API layer's
//! responsibility.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

use crate::domain::entities::{AnalyzedProperties, CharacterFrequencyMap};

/// Computes every derived property of `value`.
///
/// # Examples
///
/// ```ignore
/// let props = compute_properties("A man, a plan, a canal: Panama");
/// assert!(props.is_palindrome);
/// assert_eq!(props.word_count, 7);
/// ```
pub fn compute_properties(value: &str) -> AnalyzedProperties {
    AnalyzedProperties {
        length: value.chars().count() as i64,
        is_palindrome: is_palindrome(value),
        unique_characters: value.chars().collect::<HashSet<_>>().len() as i64,
        word_count: value.split_whitespace().count() as i64,
        sha256_hash: content_hash(value),
        character_frequency_map: character_frequency(value),
    }
}

/// Lowercase hex SHA-256 digest of the UTF-8 bytes of `value`.
pub fn content_hash(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}

/// Palindrome check over alphanumeric characters only, ignoring case.
///
/// A value with no alphanumeric characters is a palindrome.
pub fn is_palindrome(value: &str) -> bool {
    let normalized: Vec<char> = value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    normalized.iter().eq(normalized.iter().rev())
}

fn character_frequency(value: &str) -> CharacterFrequencyMap {
    let mut map = CharacterFrequencyMap::new();
    for c in value.chars() {
        *map.entry(c).or_insert(0) += 1;
    }
    map
}
