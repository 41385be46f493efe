use thiserror::Error;

/// Errors reported by the generation API.
///
/// # Taxonomy
/// - Precondition violations (`ZeroN`, `EmptyGapMark`, `GapBudgetOutOfRange`)
///   abort the call immediately and are never recovered.
/// - `GapMarkCollision` is a defensive rejection: a gap mark equal to a real
///   token would make gap tabulation ambiguous.
/// - `WindowTooWide` guards the 64-bit lattice mask; setting a `max_gap_size`
///   bounds the window and avoids it.
///
/// Degenerate input (fewer tokens than requested n) is *not* an error: the
/// generators fall back to returning the whole sequence as the sole result.
#[derive(Error, Debug)]
pub enum GenError {
	/// `n` must be strictly positive.
	#[error("n must be greater than 0")]
	ZeroN,

	/// The gap mark must be a non-empty string.
	#[error("gap mark must not be empty")]
	EmptyGapMark,

	/// The configured gap mark also occurs as a real token.
	#[error("gap mark {0:?} collides with an input token")]
	GapMarkCollision(String),

	/// `max_gap_size` outside the supported range.
	#[error("max_gap_size must be between 1 and 63, got {0}")]
	GapBudgetOutOfRange(usize),

	/// Unbudgeted input too long for one lattice enumeration.
	#[error("window of {0} tokens exceeds the 63-position lattice limit; set a max_gap_size")]
	WindowTooWide(usize),

	/// The tokenizer was given an invalid split pattern.
	#[error("invalid token pattern: {0}")]
	TokenPattern(#[from] regex::Error),
}

/// Result type for all generation operations.
pub type Result<T> = std::result::Result<T, GenError>;
