//! High-level generation entry points.
//!
//! # Responsibilities
//! - Validate call preconditions (positive `n`, gap mark distinct from
//!   every token, bounded lattice width)
//! - Filter empty tokens and apply the degenerate short-input fallback
//! - Drive the partition → lattice → normalize → classify pipeline
//! - Render accepted patterns as joined strings or token lists
//!
//! All work is synchronous and bounded; a call either returns the complete,
//! deduplicated result set or fails as a whole.

use tracing::debug;

use crate::error::{GenError, Result};
use super::filter;
use super::input::NGramInput;
use super::lattice::{self, MAX_MASK_BITS};
use super::normalize;
use super::partition;
use super::segment::{to_pattern, Pattern, Seg};
use super::window;

/// Generates the continuous n-grams of a token sequence, joined with the
/// configured separator.
///
/// # Behavior
/// - Exactly `len - n + 1` results for a sequence longer than `n`, in
///   left-to-right order; all window sizes `1..=n` when `input.inclusive`.
/// - A sequence of at most `n` tokens yields itself as the sole result.
/// - Empty tokens are silently dropped before processing.
///
/// # Errors
/// Returns an error if `n` is zero.
pub fn continuous_ngrams(tokens: &[String], input: &NGramInput) -> Result<Vec<String>> {
	let grams = continuous_ngram_lists(tokens, input)?;
	Ok(grams.iter().map(|gram| gram.join(input.separator())).collect())
}

/// Generates the continuous n-grams of a token sequence as token lists.
///
/// Same contract as [`continuous_ngrams`], without the joining step.
pub fn continuous_ngram_lists(tokens: &[String], input: &NGramInput) -> Result<Vec<Vec<String>>> {
	if input.n() == 0 {
		return Err(GenError::ZeroN);
	}
	let segs = non_empty(tokens);
	if segs.len() <= input.n() {
		return Ok(vec![segs]);
	}
	if input.inclusive {
		Ok(window::windows_inclusive(&segs, input.n()))
	} else {
		Ok(window::windows(&segs, input.n()))
	}
}

/// Generates the skip (discontinuous) n-grams of a token sequence, joined
/// with the configured separator; gaps are rendered as the gap symbol.
///
/// # Behavior
/// - Every way of keeping `n` tokens (up to `n` when `input.inclusive`)
///   out of the sequence, gaps marking the skipped stretches.
/// - Extended mode keeps leading/trailing gaps; regular mode strips them.
/// - With a `max_gap_size`, the sequence is divided into overlapping
///   windows first and no result is longer than the budget.
/// - A sequence of at most `n` tokens yields itself as the sole result.
/// - No two results share a canonical (gap-run-collapsed) form; order is
///   first-seen over the enumeration and deterministic.
///
/// # Errors
/// - `n` of zero.
/// - A gap mark that also occurs as a real token.
/// - An unbudgeted sequence too wide for one lattice enumeration.
pub fn skip_ngrams(tokens: &[String], input: &NGramInput) -> Result<Vec<String>> {
	let patterns = skip_patterns(tokens, input)?;
	Ok(patterns.iter().map(|p| render_joined(p, input)).collect())
}

/// Generates the skip n-grams of a token sequence as token lists; gap
/// positions appear as the configured gap symbol.
///
/// Same contract as [`skip_ngrams`], without the joining step.
pub fn skip_ngram_lists(tokens: &[String], input: &NGramInput) -> Result<Vec<Vec<String>>> {
	let patterns = skip_patterns(tokens, input)?;
	Ok(patterns.iter().map(|p| render_tokens(p, input)).collect())
}

/// Core skippy pipeline, shared by both rendering shapes.
fn skip_patterns(tokens: &[String], input: &NGramInput) -> Result<Vec<Pattern>> {
	if input.n() == 0 {
		return Err(GenError::ZeroN);
	}
	let segs = non_empty(tokens);
	if let Some(token) = segs.iter().find(|token| token.as_str() == input.gap_mark()) {
		return Err(GenError::GapMarkCollision(token.clone()));
	}
	if segs.len() <= input.n() {
		return Ok(vec![to_pattern(&segs)]);
	}
	if input.max_gap_size().is_none() && segs.len() > MAX_MASK_BITS {
		return Err(GenError::WindowTooWide(segs.len()));
	}

	let pool = partition::partition(&segs, input.max_gap_size(), input.extended);
	let mut candidates: Vec<Pattern> = Vec::new();
	for win in &pool {
		for raw in lattice::lattice(win, input.n(), input.inclusive) {
			candidates.push(normalize::normalize(&raw, input.extended));
		}
	}
	debug!(candidates = candidates.len(), "normalized candidate pool");

	Ok(filter::classify(
		candidates,
		input.n(),
		input.inclusive,
		input.max_gap_size(),
	))
}

/// Drops empty elements, keeping order.
fn non_empty(tokens: &[String]) -> Vec<String> {
	tokens.iter().filter(|token| !token.is_empty()).cloned().collect()
}

/// Renders a pattern as one separator-joined string.
fn render_joined(pattern: &Pattern, input: &NGramInput) -> String {
	pattern
		.iter()
		.map(|seg| match seg {
			Seg::Token(token) => token.as_str(),
			Seg::Gap => input.gap_mark(),
		})
		.collect::<Vec<_>>()
		.join(input.separator())
}

/// Renders a pattern as a list of token strings, gaps included.
fn render_tokens(pattern: &Pattern, input: &NGramInput) -> Vec<String> {
	pattern
		.iter()
		.map(|seg| match seg {
			Seg::Token(token) => token.clone(),
			Seg::Gap => input.gap_mark().to_owned(),
		})
		.collect()
}
