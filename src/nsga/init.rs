//! Unique-permutation population initialization.

use super::types::{GenomeRegistry, Solution};
use crate::error::AssemblyError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of distinct orderings of `n` fragments (n!), or `None` once the
/// count no longer fits in a `u128` (effectively unbounded for any
/// realistic population size).
pub fn distinct_orderings(n: usize) -> Option<u128> {
    let mut total: u128 = 1;
    for k in 2..=n as u128 {
        total = total.checked_mul(k)?;
    }
    Some(total)
}

/// Draws `population_size` solutions with pairwise-distinct genomes by
/// rejection sampling uniformly random permutations of
/// `0..fragment_count`.
///
/// Every accepted genome is recorded in `registry`, which the caller
/// threads on into the variation operators so uniqueness holds across
/// the whole run, including against genomes registered before this
/// call. All emitted solutions carry generation tag 0.
///
/// The sampling loop is bounded: after `attempt_limit` draws the
/// initializer gives up instead of spinning on a (near-)exhausted
/// permutation space.
///
/// # Errors
///
/// Returns [`AssemblyError::SamplingExhausted`] when the attempt budget
/// runs out first. Callers should pre-check `population_size` against
/// [`distinct_orderings`] to turn the hard capacity violation into
/// [`AssemblyError::PopulationCapacity`] up front.
pub fn init_population<R: Rng>(
    fragment_count: usize,
    population_size: usize,
    registry: &mut GenomeRegistry,
    attempt_limit: usize,
    rng: &mut R,
) -> Result<Vec<Solution>, AssemblyError> {
    let mut solutions = Vec::with_capacity(population_size);
    let mut attempts = 0;

    while solutions.len() < population_size {
        if attempts >= attempt_limit {
            return Err(AssemblyError::SamplingExhausted {
                requested: population_size,
                collected: solutions.len(),
                attempts,
            });
        }
        attempts += 1;

        let mut genome: Vec<usize> = (0..fragment_count).collect();
        genome.shuffle(rng);

        if registry.register(&genome) {
            solutions.push(Solution::new(genome, 0));
        }
    }

    Ok(solutions)
}

// ============================================================================
// Tests
// ============================================================================
