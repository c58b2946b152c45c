//! Crate-level error type.
//!
//! Total-function components (the sort and crowding engines) never fail;
//! errors surface only at the edges: reading a fragment file, and the
//! population initializer's capacity checks.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by fragment parsing and population initialization.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// The fragment benchmark file could not be read.
    #[error("failed to read fragment file {}", path.display())]
    FragmentFile {
        /// Path that failed to open or read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested population is larger than the number of distinct
    /// orderings of the fragment set, so a duplicate-free population of
    /// that size cannot exist.
    #[error(
        "population size {requested} exceeds the {available} distinct orderings \
         of {fragment_count} fragments"
    )]
    PopulationCapacity {
        /// Requested population size.
        requested: usize,
        /// Number of distinct permutations of the fragment indices.
        available: u128,
        /// Number of fragments.
        fragment_count: usize,
    },

    /// The initializer's bounded rejection sampling ran out of attempts
    /// before collecting enough unique genomes.
    ///
    /// This typically means the population size is close to the
    /// permutation-space limit for a small fragment count; raise the
    /// attempt budget or shrink the population.
    #[error(
        "collected only {collected} of {requested} unique genomes \
         after {attempts} sampling attempts"
    )]
    SamplingExhausted {
        /// Number of unique genomes requested.
        requested: usize,
        /// Number of unique genomes collected before giving up.
        collected: usize,
        /// Total random draws performed.
        attempts: usize,
    },
}
