//! DNA fragment assembly via multi-objective evolutionary search.
//!
//! Reconstructs a contig by ordering a set of sequenced fragments so that
//! two competing quality measures are jointly optimized:
//!
//! - **OAF** (Overlap of Adjacent Fragments): the summed overlap between
//!   consecutive fragments in an ordering — **maximized**.
//! - **ODF** (Overlap of Distant Fragments): the distance-weighted overlap
//!   between non-consecutive fragment pairs — **minimized**.
//!
//! Since the two objectives trade off against each other, the search
//! produces a Pareto front of candidate orderings rather than a single
//! answer, using NSGA-II selection machinery (fast non-dominated sorting
//! and crowding-distance density estimation).
//!
//! # Modules
//!
//! - [`assembly`]: Fragment records, benchmark-file parsing, and the
//!   pairwise overlap score matrix.
//! - [`nsga`]: The multi-objective optimizer — dominance test,
//!   non-dominated sort, crowding distance, unique-permutation population
//!   initialization, variation operators, and the generation-loop runner.
//! - [`error`]: Crate-level error type.
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II*
//! - Parsons, Forrest & Burks (1995), *Genetic Algorithms, Operators, and
//!   DNA Fragment Assembly*

pub mod assembly;
pub mod error;
pub mod nsga;
