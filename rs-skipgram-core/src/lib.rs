//! Continuous and skippy n-gram generation library.
//!
//! This crate provides the combinatorial engine behind corpus-linguistics
//! n-gram extraction:
//! - Continuous n-grams: every contiguous window of `n` tokens
//! - Skippy n-grams: every way of keeping `n` tokens out of a window,
//!   skipped positions marked by an explicit gap symbol
//! - Regular and extended edge policies, inclusive (up to `n`) counting,
//!   and a gap budget bounding the combinatorial enumeration
//! - A pattern-based tokenizer producing the input token sequences
//!
//! Only the high-level API is exposed publicly. The algorithm stages
//! (windowing, lattice enumeration, normalization, classification) are
//! kept internal to ensure consistency and prevent misuse.

/// Core n-gram generation: entry points and per-call parameters.
pub mod ngram;

/// Pattern-based text segmentation into token sequences.
pub mod tokenizer;

/// Error taxonomy and result alias for the generation API.
pub mod error;
