//! Fragment records and overlap scoring.
//!
//! This layer owns everything the optimizer consumes read-only: the
//! fragments themselves (parsed from a benchmark file) and the symmetric
//! pairwise overlap [`ScoreMatrix`] derived from them.
//!
//! # Key Types
//!
//! - [`Fragment`]: One sequenced read with its position in the input file.
//! - [`ScoreMatrix`]: N×N overlap scores with a `-1` diagonal sentinel.
//!
//! # Functions
//!
//! - [`read_fragments`] / [`parse_fragments`]: Benchmark-file ingestion.
//! - [`overlap_scores`]: Builds the score matrix from a fragment set.
//! - [`longest_common_substring`]: The underlying overlap measure.

mod fragment;
mod scoring;

pub use fragment::{parse_fragments, read_fragments, Fragment};
pub use scoring::{longest_common_substring, overlap_scores, ScoreMatrix};
