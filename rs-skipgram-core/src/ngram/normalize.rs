use super::segment::{count_elements, Pattern, Seg};

/// Collapses every maximal run of consecutive gaps into a single gap.
///
/// Non-gap segments are untouched and keep their relative order, so the
/// real-token count of the pattern is preserved. The collapsed form is the
/// canonical representation used to detect linguistically identical
/// patterns that differ only in raw gap placement.
pub fn collapse(pattern: &[Seg]) -> Pattern {
	let mut collapsed: Pattern = Vec::with_capacity(pattern.len());
	for seg in pattern {
		if seg.is_gap() && collapsed.last().is_some_and(Seg::is_gap) {
			continue;
		}
		collapsed.push(seg.clone());
	}
	collapsed
}

/// Removes a gap sitting at the first or the last position.
///
/// Interior gaps are preserved. Expects a collapsed pattern, so at most one
/// gap can sit at either edge.
pub fn strip_edge_gaps(pattern: &[Seg]) -> Pattern {
	let mut stripped = pattern;
	if let Some((first, rest)) = stripped.split_first() {
		if first.is_gap() {
			stripped = rest;
		}
	}
	if let Some((last, rest)) = stripped.split_last() {
		if last.is_gap() {
			stripped = rest;
		}
	}
	stripped.to_vec()
}

/// Drops every gap of a pattern, keeping only the real tokens.
///
/// Renders a continuous result out of a degenerate skippy pattern (a single
/// token flanked by gaps).
pub fn remove_gaps(pattern: &[Seg]) -> Pattern {
	pattern.iter().filter(|seg| !seg.is_gap()).cloned().collect()
}

/// Normalizes a raw lattice pattern according to the edge policy.
///
/// # Behavior
/// - Extended mode: gap runs are collapsed; leading and trailing gaps
///   survive.
/// - Regular mode: gap runs are collapsed, then edge gaps are removed.
///   A pattern reduced to a single real token is rendered bare (all its
///   gaps dropped).
pub fn normalize(pattern: &[Seg], extended: bool) -> Pattern {
	let collapsed = collapse(pattern);
	if extended {
		return collapsed;
	}
	if count_elements(&collapsed) == 1 {
		remove_gaps(&collapsed)
	} else {
		strip_edge_gaps(&collapsed)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn token(t: &str) -> Seg {
		Seg::Token(t.to_owned())
	}

	#[test]
	fn collapse_merges_gap_runs() {
		let pattern = vec![token("a"), Seg::Gap, Seg::Gap, Seg::Gap, token("b"), Seg::Gap];
		assert_eq!(
			collapse(&pattern),
			vec![token("a"), Seg::Gap, token("b"), Seg::Gap]
		);
	}

	#[test]
	fn collapse_keeps_gapless_patterns() {
		let pattern = vec![token("a"), token("b")];
		assert_eq!(collapse(&pattern), pattern);
	}

	#[test]
	fn strip_removes_only_edge_gaps() {
		let pattern = vec![Seg::Gap, token("a"), Seg::Gap, token("b"), Seg::Gap];
		assert_eq!(
			strip_edge_gaps(&pattern),
			vec![token("a"), Seg::Gap, token("b")]
		);
	}

	#[test]
	fn strip_of_all_gaps_is_empty() {
		assert_eq!(strip_edge_gaps(&[Seg::Gap]), Vec::<Seg>::new());
		assert_eq!(strip_edge_gaps(&[Seg::Gap, Seg::Gap]), Vec::<Seg>::new());
	}

	#[test]
	fn remove_gaps_keeps_tokens_in_order() {
		let pattern = vec![Seg::Gap, token("a"), Seg::Gap, token("b")];
		assert_eq!(remove_gaps(&pattern), vec![token("a"), token("b")]);
	}

	#[test]
	fn regular_mode_renders_singleton_bare() {
		let pattern = vec![Seg::Gap, Seg::Gap, token("a"), Seg::Gap];
		assert_eq!(normalize(&pattern, false), vec![token("a")]);
	}

	#[test]
	fn extended_mode_keeps_edge_gaps() {
		let pattern = vec![Seg::Gap, token("a"), Seg::Gap, Seg::Gap, token("b")];
		assert_eq!(
			normalize(&pattern, true),
			vec![Seg::Gap, token("a"), Seg::Gap, token("b")]
		);
	}

	fn pattern_strategy() -> impl Strategy<Value = Pattern> {
		proptest::collection::vec(
			prop_oneof![
				Just(Seg::Gap),
				"[a-e]{1,3}".prop_map(Seg::Token),
			],
			0..12,
		)
	}

	proptest! {
		#[test]
		fn collapse_is_idempotent(pattern in pattern_strategy()) {
			let once = collapse(&pattern);
			prop_assert_eq!(collapse(&once), once.clone());
		}

		#[test]
		fn collapse_preserves_element_count(pattern in pattern_strategy()) {
			prop_assert_eq!(count_elements(&collapse(&pattern)), count_elements(&pattern));
		}

		#[test]
		fn regular_normalization_has_no_edge_gaps(pattern in pattern_strategy()) {
			let normalized = normalize(&pattern, false);
			if let Some(first) = normalized.first() {
				prop_assert!(!first.is_gap());
			}
			if let Some(last) = normalized.last() {
				prop_assert!(!last.is_gap());
			}
		}
	}
}
