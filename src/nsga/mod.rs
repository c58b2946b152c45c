//! Multi-objective fragment-ordering optimizer.
//!
//! NSGA-II-style evolutionary search over permutations of fragment
//! indices. The selection machinery ranks candidates into Pareto fronts
//! with a fast non-dominated sort, breaks rank ties with a crowding
//! density estimate, and keeps every genome ever produced unique through
//! a run-wide registry of genome hashes.
//!
//! # Core Types
//!
//! - [`Solution`]: A candidate ordering with its objective values, front
//!   rank, and crowding distance.
//! - [`GenomeRegistry`]: Insert-only set of genome hashes threaded through
//!   initialization and variation to keep genomes unique for a whole run.
//! - [`NsgaConfig`]: Algorithm parameters (population size, rates, seed).
//! - [`NsgaRunner`]: Executes the generation loop and returns the
//!   Pareto front.
//!
//! # Submodules
//!
//! - [`dominance`]: Pairwise dominance test (maximize OAF, minimize ODF)
//! - [`sorting`]: Fast non-dominated sort into ranked fronts
//! - [`crowding`]: Per-front crowding distances with boundary sentinels
//! - [`init`]: Unique-permutation population initialization
//! - [`operators`]: Mating-pool selection, crossover, and mutation
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II*, IEEE Trans. Evolutionary Computation 6(2)

mod config;
pub mod crowding;
pub mod dominance;
pub mod init;
pub mod operators;
mod runner;
pub mod sorting;
mod types;

pub use config::NsgaConfig;
pub use runner::{GenerationStats, NsgaResult, NsgaRunner};
pub use types::{genome_hash, GenomeRegistry, Solution};
