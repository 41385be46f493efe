use std::collections::HashSet;

use tracing::trace;

use super::segment::{count_elements, Pattern};

/// Accepts or rejects normalized candidate patterns and removes duplicates.
///
/// A candidate is kept iff all of the following hold:
/// - its real-token count is in `1..=n` (inclusive mode) or exactly `n`
///   (exact mode); the zero-token pattern is always rejected, which also
///   covers the extended-mode lone-gap pattern,
/// - its length does not exceed the gap budget, when one is set,
/// - no previously accepted pattern has the same canonical form.
///
/// Candidates arrive already normalized, so the pattern itself *is* its
/// canonical form and doubles as the dedup key. Acceptance is first-seen
/// over the enumeration order of the lattice and the partition pool, which
/// makes output order deterministic for a given input and flag set. The
/// seen-set makes each dedup probe O(1) instead of a scan of the kept list.
pub fn classify(
	candidates: Vec<Pattern>,
	n: usize,
	inclusive: bool,
	max_gap_size: Option<usize>,
) -> Vec<Pattern> {
	let mut seen: HashSet<Pattern> = HashSet::new();
	let mut kept: Vec<Pattern> = Vec::new();

	for candidate in candidates {
		let elements = count_elements(&candidate);
		if elements == 0 || elements > n {
			trace!(?candidate, elements, "rejected by element count");
			continue;
		}
		if !inclusive && elements < n {
			trace!(?candidate, elements, "rejected, below exact target");
			continue;
		}
		if max_gap_size.is_some_and(|g| candidate.len() > g) {
			trace!(?candidate, "rejected, longer than the gap budget");
			continue;
		}
		if seen.contains(&candidate) {
			continue;
		}
		seen.insert(candidate.clone());
		kept.push(candidate);
	}
	kept
}
