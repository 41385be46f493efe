use tracing::debug;

use super::segment::{to_pattern, Pattern, Seg};
use super::window;

/// Splits a token sequence into the windows handed to the lattice.
///
/// This is the crate's admission control: without it, lattice size is
/// exponential in the full input length. With a gap budget `g`, per-window
/// work is capped at `2^g` candidates regardless of document length.
///
/// # Behavior
/// - No budget, or the sequence fits the budget: one window holding the
///   whole sequence.
/// - Otherwise: every overlapping window of `g` tokens, left to right. In
///   extended mode each window edge that faces skipped context receives a
///   fixed gap pad (`[gap] + w`, `w + [gap]`, or both), so interior
///   windows can still express truncated surroundings.
///
/// Patterns whose gaps would span two non-adjacent windows are never
/// generated; that windowing approximation is the accepted price of
/// bounding the enumeration.
pub fn partition(segs: &[String], max_gap_size: Option<usize>, extended: bool) -> Vec<Pattern> {
	let budget = match max_gap_size {
		Some(g) if segs.len() > g => g,
		_ => return vec![to_pattern(segs)],
	};

	let wins = window::windows(segs, budget);
	let last = wins.len() - 1;
	let pool: Vec<Pattern> = wins
		.iter()
		.enumerate()
		.map(|(i, win)| {
			let mut padded = Pattern::with_capacity(win.len() + 2);
			if extended && i > 0 {
				padded.push(Seg::Gap);
			}
			padded.extend(to_pattern(win));
			if extended && i < last {
				padded.push(Seg::Gap);
			}
			padded
		})
		.collect();
	debug!(windows = pool.len(), budget, extended, "divided lattice generation");
	pool
}
