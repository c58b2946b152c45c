//! Variation operators: mating-pool selection, crossover, and mutation.
//!
//! All offspring genomes pass through the run-wide [`GenomeRegistry`];
//! a child whose ordering has already appeared anywhere in the run is
//! discarded, so the population-wide uniqueness invariant established by
//! the initializer survives variation.

use super::crowding::BOUNDARY_SENTINEL;
use super::types::{GenomeRegistry, Solution};
use rand::Rng;

/// Crowding distance as a selection preference: the `-1` sentinel means
/// "preserve regardless of crowding" and outranks every finite value.
pub(crate) fn crowding_preference(distance: f64) -> f64 {
    if distance == BOUNDARY_SENTINEL {
        f64::INFINITY
    } else {
        distance
    }
}

/// Crowded-comparison test: lower rank wins; within a rank, the less
/// crowded solution (larger preference) wins.
fn crowded_better(a: &Solution, b: &Solution) -> bool {
    if a.rank != b.rank {
        return a.rank < b.rank;
    }
    crowding_preference(a.crowding_distance) > crowding_preference(b.crowding_distance)
}

/// Selects a mating pool of `population.len()` positions by binary
/// crowded tournament.
///
/// Requires ranks and crowding distances to be assigned (sort and crowd
/// the population first).
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn select_mating_pool<R: Rng>(population: &[Solution], rng: &mut R) -> Vec<usize> {
    assert!(!population.is_empty(), "cannot select from empty population");
    let n = population.len();

    (0..n)
        .map(|_| {
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            if crowded_better(&population[j], &population[i]) {
                j
            } else {
                i
            }
        })
        .collect()
}

/// Order Crossover (OX) on permutation genomes.
///
/// A random segment of each parent is kept in place; the remaining
/// positions are filled with the other parent's values in their original
/// order, wrapping after the segment.
///
/// # Panics
///
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (start, end) = random_segment(n, rng);
    let child1 = ox_build_child(parent1, parent2, start, end);
    let child2 = ox_build_child(parent2, parent1, start, end);
    (child1, child2)
}

/// Build one OX child: copy segment from `template`, fill from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    // Fill from the donor starting just after the segment, wrapping.
    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let val = donor[(end + 1 + offset) % n];
        if !in_segment[val] {
            child[pos] = val;
            pos = (pos + 1) % n;
        }
    }

    child
}

/// Swap mutation: exchange two random genome positions.
pub fn swap_mutation<R: Rng>(genome: &mut [usize], rng: &mut R) {
    let n = genome.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    genome.swap(i, j);
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Crosses consecutive pairs from the mating pool, emitting only
/// never-before-seen offspring tagged with `generation`.
///
/// Each pair recombines with probability `crossover_rate`; a pair that
/// skips crossover contributes no offspring (a clone could never pass
/// the registry). Children whose genomes are already registered are
/// dropped.
pub fn crossover<R: Rng>(
    population: &[Solution],
    selection: &[usize],
    registry: &mut GenomeRegistry,
    crossover_rate: f64,
    generation: usize,
    rng: &mut R,
) -> Vec<Solution> {
    let mut offspring = Vec::new();

    for pair in selection.chunks_exact(2) {
        if rng.random_range(0.0..1.0) >= crossover_rate {
            continue;
        }
        let p1 = &population[pair[0]].genome;
        let p2 = &population[pair[1]].genome;
        if p1.is_empty() {
            continue;
        }

        let (c1, c2) = order_crossover(p1, p2, rng);
        for genome in [c1, c2] {
            if registry.register(&genome) {
                offspring.push(Solution::new(genome, generation));
            }
        }
    }

    offspring
}

/// Swap-mutates each selected solution with probability `mutation_rate`,
/// emitting only never-before-seen offspring tagged with `generation`.
pub fn mutation<R: Rng>(
    population: &[Solution],
    selection: &[usize],
    registry: &mut GenomeRegistry,
    mutation_rate: f64,
    generation: usize,
    rng: &mut R,
) -> Vec<Solution> {
    let mut offspring = Vec::new();

    for &p in selection {
        if rng.random_range(0.0..1.0) >= mutation_rate {
            continue;
        }
        let mut genome = population[p].genome.clone();
        swap_mutation(&mut genome, rng);
        if registry.register(&genome) {
            offspring.push(Solution::new(genome, generation));
        }
    }

    offspring
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn is_permutation(genome: &[usize], n: usize) -> bool {
        let set: HashSet<usize> = genome.iter().copied().collect();
        genome.len() == n && set.len() == n && genome.iter().all(|&v| v < n)
    }

    fn ranked(rank: usize, crowding: f64) -> Solution {
        let mut s = Solution::new(vec![0], 0);
        s.rank = rank;
        s.crowding_distance = crowding;
        s
    }

    // ---- Crowded comparison / selection ----

    #[test]
    fn test_lower_rank_wins() {
        assert!(crowded_better(&ranked(1, 0.1), &ranked(2, 10.0)));
        assert!(!crowded_better(&ranked(3, 10.0), &ranked(2, 0.1)));
    }

    #[test]
    fn test_same_rank_less_crowded_wins() {
        assert!(crowded_better(&ranked(1, 5.0), &ranked(1, 2.0)));
        assert!(!crowded_better(&ranked(1, 2.0), &ranked(1, 5.0)));
    }

    #[test]
    fn test_sentinel_outranks_finite_crowding() {
        assert!(crowded_better(&ranked(1, -1.0), &ranked(1, 100.0)));
        assert!(!crowded_better(&ranked(1, 100.0), &ranked(1, -1.0)));
    }

    #[test]
    fn test_mating_pool_size_and_bounds() {
        let pop: Vec<Solution> = (0..10).map(|i| ranked(1 + i % 3, i as f64)).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let pool = select_mating_pool(&pop, &mut rng);
        assert_eq!(pool.len(), 10);
        assert!(pool.iter().all(|&p| p < 10));
    }

    #[test]
    fn test_mating_pool_favors_front_one() {
        let mut pop: Vec<Solution> = (0..8).map(|_| ranked(2, 1.0)).collect();
        pop[3] = ranked(1, 1.0);
        let mut rng = StdRng::seed_from_u64(42);

        let mut count = 0;
        for _ in 0..200 {
            count += select_mating_pool(&pop, &mut rng)
                .iter()
                .filter(|&&p| p == 3)
                .count();
        }
        // Position 3 wins every tournament it enters; with 8 positions it
        // enters well over 1/8 of them.
        assert!(count > 300, "front-1 member selected only {count} times");
    }

    // ---- Order crossover ----

    #[test]
    fn test_ox_produces_valid_permutations() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1: Vec<usize> = (0..8).collect();
        let p2: Vec<usize> = (0..8).rev().collect();

        for _ in 0..100 {
            let (c1, c2) = order_crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&c1, 8), "OX child1 not valid: {c1:?}");
            assert!(is_permutation(&c2, 8), "OX child2 not valid: {c2:?}");
        }
    }

    #[test]
    fn test_ox_single_element() {
        let mut rng = StdRng::seed_from_u64(42);
        let (c1, c2) = order_crossover(&[0], &[0], &mut rng);
        assert_eq!(c1, vec![0]);
        assert_eq!(c2, vec![0]);
    }

    // ---- Swap mutation ----

    #[test]
    fn test_swap_preserves_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let mut genome: Vec<usize> = (0..10).collect();
            swap_mutation(&mut genome, &mut rng);
            assert!(is_permutation(&genome, 10));
        }
    }

    #[test]
    fn test_swap_short_genomes_untouched() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut single = vec![0];
        swap_mutation(&mut single, &mut rng);
        assert_eq!(single, vec![0]);
    }

    // ---- Registry-gated offspring ----

    fn permutation_population(genomes: &[&[usize]]) -> (Vec<Solution>, GenomeRegistry) {
        let mut registry = GenomeRegistry::new();
        let pop = genomes
            .iter()
            .map(|g| {
                registry.register(g);
                Solution::new(g.to_vec(), 0)
            })
            .collect();
        (pop, registry)
    }

    #[test]
    fn test_crossover_offspring_are_unseen_permutations() {
        let (pop, mut registry) =
            permutation_population(&[&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], &[2, 0, 4, 1, 3]]);
        let selection = vec![0, 1, 1, 2, 0, 2];
        let mut rng = StdRng::seed_from_u64(42);

        let children = crossover(&pop, &selection, &mut registry, 1.0, 3, &mut rng);

        let mut seen: HashSet<Vec<usize>> =
            pop.iter().map(|s| s.genome.clone()).collect();
        for child in &children {
            assert!(is_permutation(&child.genome, 5));
            assert_eq!(child.generation, 3);
            assert!(
                seen.insert(child.genome.clone()),
                "offspring duplicates a seen genome: {:?}",
                child.genome
            );
        }
    }

    #[test]
    fn test_crossover_rate_zero_yields_nothing() {
        let (pop, mut registry) = permutation_population(&[&[0, 1, 2], &[2, 1, 0]]);
        let mut rng = StdRng::seed_from_u64(42);
        let children = crossover(&pop, &[0, 1], &mut registry, 0.0, 1, &mut rng);
        assert!(children.is_empty());
    }

    #[test]
    fn test_mutation_offspring_are_unseen_permutations() {
        let (pop, mut registry) =
            permutation_population(&[&[0, 1, 2, 3], &[3, 2, 1, 0], &[1, 3, 0, 2]]);
        let selection = vec![0, 1, 2];
        let mut rng = StdRng::seed_from_u64(42);

        let children = mutation(&pop, &selection, &mut registry, 1.0, 5, &mut rng);

        let mut seen: HashSet<Vec<usize>> =
            pop.iter().map(|s| s.genome.clone()).collect();
        for child in &children {
            assert!(is_permutation(&child.genome, 4));
            assert_eq!(child.generation, 5);
            assert!(seen.insert(child.genome.clone()));
        }
    }

    #[test]
    fn test_mutation_drops_already_seen_results() {
        // With 2 fragments the only swap result is the other ordering,
        // which is already registered: nothing new can be produced.
        let (pop, mut registry) = permutation_population(&[&[0, 1], &[1, 0]]);
        let mut rng = StdRng::seed_from_u64(42);

        let children = mutation(&pop, &[0, 1], &mut registry, 1.0, 1, &mut rng);
        assert!(children.is_empty());
        assert_eq!(registry.len(), 2);
    }
}
