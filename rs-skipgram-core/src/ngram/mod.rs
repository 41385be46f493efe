//! Top-level module for the n-gram generation system.
//!
//! This crate generates, from an ordered token sequence:
//! - Continuous n-grams (contiguous windows of `n` tokens)
//! - Skippy n-grams (`n` tokens interleaved with explicit gap marks),
//!   regular or extended
//!
//! The pipeline is partition → lattice → normalize → classify → render;
//! only `generator` and `input` are exposed, the algorithm stages stay
//! internal.

/// High-level generation entry points.
///
/// Exposes continuous and skippy n-gram generation with joined-string or
/// token-list rendering, plus the degenerate short-input fallback.
pub mod generator;

/// Per-call generation parameters.
///
/// Carries the target count, mode flags, gap budget, separator and gap
/// symbol, with validation at the point values are set.
pub mod input;

/// Pattern data model: the token-or-gap segment and element counting.
///
/// This module is not exposed publicly.
mod segment;

/// Continuous window generation (exact size and inclusive 1..=n),
/// including the short-input fallback.
mod window;

/// Bit-mask enumeration of the keep-or-gap choice lattice, with early
/// pruning by kept-token count.
mod lattice;

/// Division of over-budget sequences into overlapping lattice windows,
/// with extended-mode edge padding.
mod partition;

/// Gap normalization: run collapsing, edge stripping, gap removal.
mod normalize;

/// Candidate classification: element-count and budget rules, plus
/// canonical-form deduplication.
mod filter;
