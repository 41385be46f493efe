use regex::Regex;

use crate::error::Result;

/// Splits a text into non-empty tokens using a delimiter pattern.
///
/// - `pattern` is a regular expression matched against the delimiters
///   (for example `r"\s+"` for whitespace-separated words).
/// - The empty pattern splits between every character, yielding
///   character-level tokens.
/// - Empty fragments produced by the split are dropped.
///
/// # Errors
/// Returns an error if `pattern` is not a valid regular expression.
pub fn segment(text: &str, pattern: &str) -> Result<Vec<String>> {
	let delimiter = Regex::new(pattern)?;
	Ok(delimiter
		.split(text)
		.filter(|fragment| !fragment.is_empty())
		.map(str::to_owned)
		.collect())
}
