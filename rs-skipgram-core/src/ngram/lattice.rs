//! Gap-choice lattice enumeration.
//!
//! For a window of `t` real tokens, every one of the `2^t` keep-or-gap
//! choices is enumerated with an explicit bit mask (bit set = position
//! gapped) instead of recursive expansion, keeping memory flat. Gap
//! segments already present in the window (the pads added by the
//! partitioner in extended mode) are fixed and take no bit.
//!
//! This is the sole source of combinatorial growth in the crate; callers
//! must hand in windows already bounded by the gap budget and by the
//! 63-position mask limit.
//!
//! Candidates whose kept-token count can never pass the element-count
//! filter are pruned during enumeration, from the mask's count of ones,
//! before any pattern is materialized.

use super::segment::{Pattern, Seg};

/// Maximum number of maskable token positions per window.
pub const MAX_MASK_BITS: usize = 63;

/// Enumerates the skip patterns of one window.
///
/// # Parameters
/// - `window`: token window, possibly carrying fixed edge gaps.
/// - `n`: target element count.
/// - `inclusive`: accept up to `n` kept tokens instead of exactly `n`.
///
/// # Behavior
/// - Patterns come out in binary counting order over the token positions,
///   with the last position varying fastest: the all-token pattern first,
///   the all-gap pattern last.
/// - Pruned during enumeration: zero kept tokens, more than `n` kept
///   tokens, and (in exact mode) fewer than `n` kept tokens.
pub fn lattice(window: &[Seg], n: usize, inclusive: bool) -> Vec<Pattern> {
	let token_positions: Vec<usize> = window
		.iter()
		.enumerate()
		.filter_map(|(i, seg)| (!seg.is_gap()).then_some(i))
		.collect();
	let bits = token_positions.len();
	debug_assert!(bits <= MAX_MASK_BITS, "window exceeds the lattice mask");

	let mut patterns = Vec::new();
	for mask in 0u64..(1u64 << bits) {
		let kept = bits - mask.count_ones() as usize;
		if kept == 0 || kept > n || (!inclusive && kept < n) {
			continue;
		}
		let mut pattern: Pattern = window.to_vec();
		for (i, position) in token_positions.iter().enumerate() {
			// Highest bit maps to the leftmost position so that masks count
			// through patterns in left-to-right lexicographic order.
			if mask >> (bits - 1 - i) & 1 == 1 {
				pattern[*position] = Seg::Gap;
			}
		}
		patterns.push(pattern);
	}
	patterns
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ngram::segment::{count_elements, to_pattern};

	fn window(parts: &[&str]) -> Vec<Seg> {
		to_pattern(&parts.iter().map(|p| (*p).to_owned()).collect::<Vec<_>>())
	}

	#[test]
	fn inclusive_lattice_is_complete_minus_all_gaps() {
		// 2^3 choices, minus the zero-token pattern
		let patterns = lattice(&window(&["a", "b", "c"]), 3, true);
		assert_eq!(patterns.len(), 7);
		assert!(patterns.iter().all(|p| count_elements(p) > 0));
	}

	#[test]
	fn exact_mode_prunes_by_count() {
		let patterns = lattice(&window(&["a", "b", "c"]), 2, false);
		assert_eq!(patterns.len(), 3);
		assert!(patterns.iter().all(|p| count_elements(p) == 2));
	}

	#[test]
	fn enumeration_starts_with_the_full_window() {
		let w = window(&["a", "b"]);
		let patterns = lattice(&w, 2, true);
		assert_eq!(patterns[0], w);
	}

	#[test]
	fn last_position_varies_fastest() {
		let patterns = lattice(&window(&["a", "b"]), 2, true);
		assert_eq!(
			patterns,
			vec![
				vec![Seg::Token("a".to_owned()), Seg::Token("b".to_owned())],
				vec![Seg::Token("a".to_owned()), Seg::Gap],
				vec![Seg::Gap, Seg::Token("b".to_owned())],
			]
		);
	}

	#[test]
	fn fixed_gaps_take_no_mask_bit() {
		let mut w = window(&["a", "b"]);
		w.push(Seg::Gap);
		let patterns = lattice(&w, 2, true);
		// Same three surviving choices as for ["a", "b"], each keeping the pad.
		assert_eq!(patterns.len(), 3);
		assert!(patterns.iter().all(|p| p.len() == 3 && p[2].is_gap()));
	}
}
