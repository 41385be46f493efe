/// One position of a skip pattern.
///
/// A pattern position either keeps its real token or stands for a skipped
/// stretch of the input. Keeping the gap as its own variant (instead of a
/// reserved token string) makes it impossible for the engine to confuse a
/// gap with a real token; the configured gap symbol only appears when a
/// pattern is rendered for the caller.
///
/// ## Invariants
/// - `Token` never wraps an empty string (empty elements are filtered out
///   before patterns are built)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Seg {
	/// A real token kept at this position.
	Token(String),
	/// A position intentionally skipped.
	Gap,
}

impl Seg {
	/// Returns `true` when this position is a gap.
	pub fn is_gap(&self) -> bool {
		matches!(self, Seg::Gap)
	}
}

/// A skip pattern: the ordered choices made over one token window.
///
/// Transient; patterns only live between lattice enumeration and rendering.
pub type Pattern = Vec<Seg>;

/// Counts the real (non-gap) tokens of a pattern.
///
/// Invariant under gap-run collapsing: normalization only ever touches
/// gaps, never tokens.
pub fn count_elements(pattern: &[Seg]) -> usize {
	pattern.iter().filter(|seg| !seg.is_gap()).count()
}

/// Builds the all-token pattern for a sequence of segments.
///
/// Used for lattice windows and for the degenerate short-input fallback.
pub fn to_pattern(segs: &[String]) -> Pattern {
	segs.iter().map(|seg| Seg::Token(seg.clone())).collect()
}
