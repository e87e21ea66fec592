//! Heuristic natural-language to [`StringFilter`] translation.
//!
//! This is keyword and pattern matching, not language understanding. The
//! query is lower-cased and every rule below is tried in order; any subset may
//! fire and later rules only add to (or explicitly override) earlier ones.
//!
//! | # | Pattern | Effect |
//! |---|---|---|
//! | 1 | contains `palind` | `is_palindrome = true` |
//! | 2 | `single word`, `single-word`, `one word` | `word_count = 1` |
//! | 3 | `longer than <N>` | `min_length = N + 1` |
//! | 4 | `<N> characters`, only without `longer than` | `min_length = N` |
//! | 5 | `letter <c>`, overridden by `containing the letter <c>` | `contains_character = c` |
//! | 6 | `between <A> and <B> characters` | `min_length = A`, `max_length = B` |
//!
//! A parsed filter whose `min_length` exceeds its `max_length` is rejected.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::domain::filter::StringFilter;

static LONGER_THAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"longer than ([0-9]+)").unwrap());
static N_CHARACTERS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*characters").unwrap());
static LETTER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"letter (\w)").unwrap());
static CONTAINING_LETTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"containing the letter (\w)").unwrap());
static BETWEEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"between ([0-9]+) and ([0-9]+)\s*characters").unwrap());

const SINGLE_WORD_PHRASES: &[&str] = &["single word", "single-word", "one word"];

/// Errors produced while interpreting a natural-language query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NlQueryError {
    #[error("Unable to parse natural language query: {0}")]
    Parse(String),

    #[error("Conflicting filters: min_length {min_length} exceeds max_length {max_length}")]
    ConflictingFilters { min_length: i64, max_length: i64 },
}

/// Translates a natural-language query into a structured filter.
///
/// # Errors
///
/// Returns [`NlQueryError::Parse`] if a captured number does not fit in an
/// `i64`. Only ASCII digits are recognized as numbers.
///
/// Returns [`NlQueryError::ConflictingFilters`] if the derived length bounds
/// contradict each other.
///
/// # Examples
///
/// ```ignore
/// let filter = parse_query("strings longer than 10 characters")?;
/// assert_eq!(filter.min_length, Some(11));
/// ```
pub fn parse_query(query: &str) -> Result<StringFilter, NlQueryError> {
    let text = query.to_lowercase();
    let mut filter = StringFilter::new();

    if text.contains("palind") {
        filter.is_palindrome = Some(true);
    }

    if SINGLE_WORD_PHRASES.iter().any(|p| text.contains(p)) {
        filter.word_count = Some(1);
    }

    if let Some(caps) = LONGER_THAN_REGEX.captures(&text) {
        let n = capture_number(&caps, 1)?;
        let min = n
            .checked_add(1)
            .ok_or_else(|| NlQueryError::Parse(format!("length {n} is out of range")))?;
        filter.min_length = Some(min);
    }

    if let Some(caps) = N_CHARACTERS_REGEX.captures(&text)
        && !text.contains("longer than")
    {
        filter.min_length = Some(capture_number(&caps, 1)?);
    }

    if let Some(c) = capture_char(&LETTER_REGEX, &text) {
        filter.contains_character = Some(c);
    }
    if text.contains("containing the letter")
        && let Some(c) = capture_char(&CONTAINING_LETTER_REGEX, &text)
    {
        filter.contains_character = Some(c);
    }

    if let Some(caps) = BETWEEN_REGEX.captures(&text) {
        filter.min_length = Some(capture_number(&caps, 1)?);
        filter.max_length = Some(capture_number(&caps, 2)?);
    }

    if let Some((min_length, max_length)) = filter.conflicting_length_bounds() {
        return Err(NlQueryError::ConflictingFilters {
            min_length,
            max_length,
        });
    }

    Ok(filter)
}

fn capture_number(caps: &Captures<'_>, group: usize) -> Result<i64, NlQueryError> {
    let raw = caps
        .get(group)
        .ok_or_else(|| NlQueryError::Parse(format!("missing capture group {group}")))?
        .as_str();

    raw.parse::<i64>()
        .map_err(|e| NlQueryError::Parse(format!("invalid number '{raw}': {e}")))
}

fn capture_char(regex: &Regex, text: &str) -> Option<char> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
}
