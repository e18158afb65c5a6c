//! Search-term probe strategy.
//!
//! A bare year query against either catalog rarely returns anything useful,
//! so each source is probed with a fixed sequence of genre-hinted terms
//! until one of them produces candidates.

/// Genre hints, in probe order. Order is significant: callers try terms in
/// sequence and stop at the first non-empty result set.
const GENRE_HINTS: [&str; 6] = ["80s hit", "pop song", "new wave", "synth", "rock", "classic"];

/// Build the ordered probe terms for a target year.
///
/// Deterministic: always six terms of the form `"{year} {genre-hint}"`.
///
/// # Examples
///
/// ```rust
/// use birthday_jukebox::build_search_terms;
///
/// let terms = build_search_terms(1985);
/// assert_eq!(terms.first().map(String::as_str), Some("1985 80s hit"));
/// assert_eq!(terms.len(), 6);
/// ```
pub fn build_search_terms(year: i32) -> Vec<String> {
    GENRE_HINTS
        .iter()
        .map(|hint| format!("{year} {hint}"))
        .collect()
}
