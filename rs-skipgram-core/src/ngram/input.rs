use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};
use crate::ngram::lattice::MAX_MASK_BITS;

/// Input parameters for one n-gram generation call.
///
/// `NGramInput` carries both **mode flags** (extendedness, inclusiveness,
/// the gap budget) and **rendering configuration** (separator, gap symbol).
/// There is no process-wide default state: every call receives its
/// configuration through a value of this type.
///
/// # Responsibilities
/// - Track the target element count `n` and the generation flags
/// - Validate values that have preconditions (`n`, `max_gap_size`,
///   `gap_mark`) at the point they are set
/// - Provide the separator and gap symbol used when results are rendered
///
/// # Invariants
/// - `n` is always >= 1
/// - `max_gap_size`, when set, is within `1..=63` (the lattice mask bound)
/// - `gap_mark` is never empty
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NGramInput {
	/// Target number of real tokens per result.
	n: usize,

	/// Accept results with up to `n` tokens instead of exactly `n`.
	pub inclusive: bool,

	/// Keep leading/trailing gaps on skip n-grams (extended definition).
	pub extended: bool,

	/// Upper bound on pattern length; caps lattice enumeration at `2^g`.
	max_gap_size: Option<usize>,

	/// Separator placed between tokens of a joined result.
	separator: String,

	/// Symbol standing for a gap in rendered results.
	gap_mark: String,
}

impl NGramInput {
	/// Creates an input for target count `n` with the default configuration:
	/// exact counting, extended edges, no gap budget, `" "` as separator and
	/// `"…"` as gap symbol.
	///
	/// # Errors
	/// Returns an error if `n` is zero.
	pub fn new(n: usize) -> Result<Self> {
		if n == 0 {
			return Err(GenError::ZeroN);
		}
		Ok(Self {
			n,
			inclusive: false,
			extended: true,
			max_gap_size: None,
			separator: " ".to_owned(),
			gap_mark: "…".to_owned(),
		})
	}

	/// Returns the target element count.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Sets the target element count.
	///
	/// # Errors
	/// Returns an error if `n` is zero.
	pub fn set_n(&mut self, n: usize) -> Result<()> {
		if n == 0 {
			return Err(GenError::ZeroN);
		}
		self.n = n;
		Ok(())
	}

	/// Returns the gap budget, if one is set.
	pub fn max_gap_size(&self) -> Option<usize> {
		self.max_gap_size
	}

	/// Sets or clears the gap budget.
	///
	/// # Errors
	/// Returns an error if the budget is zero or larger than the number of
	/// positions one lattice mask can cover.
	pub fn set_max_gap_size(&mut self, max_gap_size: Option<usize>) -> Result<()> {
		if let Some(g) = max_gap_size {
			if g == 0 || g > MAX_MASK_BITS {
				return Err(GenError::GapBudgetOutOfRange(g));
			}
		}
		self.max_gap_size = max_gap_size;
		Ok(())
	}

	/// Returns the separator used for joined results.
	pub fn separator(&self) -> &str {
		&self.separator
	}

	/// Sets the separator used for joined results. Any string is accepted,
	/// including the empty one.
	pub fn set_separator(&mut self, separator: &str) {
		self.separator = separator.to_owned();
	}

	/// Returns the gap symbol used for rendered results.
	pub fn gap_mark(&self) -> &str {
		&self.gap_mark
	}

	/// Sets the gap symbol used for rendered results.
	///
	/// The symbol must also differ from every real token of the sequences
	/// this input is used with; that collision is checked per call, since
	/// the input outlives any one token sequence.
	///
	/// # Errors
	/// Returns an error if the symbol is empty.
	pub fn set_gap_mark(&mut self, gap_mark: &str) -> Result<()> {
		if gap_mark.is_empty() {
			return Err(GenError::EmptyGapMark);
		}
		self.gap_mark = gap_mark.to_owned();
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_n_is_rejected() {
		assert!(matches!(NGramInput::new(0), Err(GenError::ZeroN)));
		let mut input = NGramInput::new(2).unwrap();
		assert!(matches!(input.set_n(0), Err(GenError::ZeroN)));
		assert_eq!(input.n(), 2);
	}

	#[test]
	fn defaults_match_the_documented_configuration() {
		let input = NGramInput::new(3).unwrap();
		assert!(!input.inclusive);
		assert!(input.extended);
		assert_eq!(input.max_gap_size(), None);
		assert_eq!(input.separator(), " ");
		assert_eq!(input.gap_mark(), "…");
	}

	#[test]
	fn gap_budget_is_range_checked() {
		let mut input = NGramInput::new(2).unwrap();
		assert!(input.set_max_gap_size(Some(5)).is_ok());
		assert!(matches!(
			input.set_max_gap_size(Some(0)),
			Err(GenError::GapBudgetOutOfRange(0))
		));
		assert!(matches!(
			input.set_max_gap_size(Some(64)),
			Err(GenError::GapBudgetOutOfRange(64))
		));
		assert!(input.set_max_gap_size(None).is_ok());
	}

	#[test]
	fn empty_gap_mark_is_rejected() {
		let mut input = NGramInput::new(2).unwrap();
		assert!(matches!(input.set_gap_mark(""), Err(GenError::EmptyGapMark)));
		assert!(input.set_gap_mark("_").is_ok());
		assert_eq!(input.gap_mark(), "_");
	}
}
