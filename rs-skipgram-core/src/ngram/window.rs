//! Continuous window generation over a token sequence.
//!
//! Windows are produced in left-to-right order of starting position and
//! duplicates are retained as found: two windows with identical content
//! both appear. This module feeds both the continuous n-gram entry point
//! and the partitioner, which slides windows of `max_gap_size` tokens.
//!
//! The short-input fallback lives here too: a sequence that cannot fill a
//! single window of the requested size is returned whole, so a non-empty
//! input never produces an empty result.

/// Returns every contiguous window of exactly `n` tokens.
///
/// # Behavior
/// - `segs.len() > n`: all `len - n + 1` windows, by starting position.
/// - `segs.len() <= n`: the whole sequence as the sole window.
pub fn windows(segs: &[String], n: usize) -> Vec<Vec<String>> {
	debug_assert!(n > 0, "window size must be positive");
	if segs.len() <= n {
		return vec![segs.to_vec()];
	}
	segs.windows(n).map(<[String]>::to_vec).collect()
}

/// Returns every contiguous window of every size `1..=n`.
///
/// Sizes are emitted in ascending order; within one size, windows keep
/// their left-to-right order. Sizes larger than the sequence itself
/// contribute nothing beyond the whole sequence.
pub fn windows_inclusive(segs: &[String], n: usize) -> Vec<Vec<String>> {
	debug_assert!(n > 0, "window size must be positive");
	let mut all = Vec::new();
	for size in 1..=n.min(segs.len().max(1)) {
		all.extend(windows(segs, size));
	}
	all
}

#[cfg(test)]
mod tests {
	use super::*;

	fn segs(parts: &[&str]) -> Vec<String> {
		parts.iter().map(|p| (*p).to_owned()).collect()
	}

	#[test]
	fn window_count_law() {
		// m tokens and size n give m - n + 1 windows
		let tokens = segs(&["a", "b", "c", "d", "e"]);
		let wins = windows(&tokens, 2);
		assert_eq!(wins.len(), 4);
		assert!(wins.iter().all(|w| w.len() == 2));
		assert_eq!(wins[0], segs(&["a", "b"]));
		assert_eq!(wins[3], segs(&["d", "e"]));
	}

	#[test]
	fn duplicates_are_retained() {
		let tokens = segs(&["a", "b", "a", "b"]);
		let wins = windows(&tokens, 2);
		assert_eq!(wins.len(), 3);
		assert_eq!(wins[0], wins[2]);
	}

	#[test]
	fn short_input_falls_back_to_whole_sequence() {
		let tokens = segs(&["a", "b"]);
		assert_eq!(windows(&tokens, 5), vec![tokens.clone()]);
		assert_eq!(windows(&tokens, 2), vec![tokens]);
	}

	#[test]
	fn inclusive_emits_all_sizes_in_order() {
		let tokens = segs(&["a", "b", "c"]);
		let wins = windows_inclusive(&tokens, 2);
		assert_eq!(
			wins,
			vec![
				segs(&["a"]),
				segs(&["b"]),
				segs(&["c"]),
				segs(&["a", "b"]),
				segs(&["b", "c"]),
			]
		);
	}

	#[test]
	fn inclusive_caps_sizes_at_sequence_length() {
		let tokens = segs(&["a", "b"]);
		let wins = windows_inclusive(&tokens, 4);
		assert_eq!(wins, vec![segs(&["a"]), segs(&["b"]), segs(&["a", "b"])]);
	}
}
