//! Fast non-dominated sorting into ranked Pareto fronts.

use super::dominance::{dominates, Dominance};
use super::types::Solution;

/// Partitions a population into ranked fronts and assigns each
/// solution's `rank` in place (front 1 ⇒ rank 1).
///
/// Fronts are vectors of positions into `population`; together they
/// cover every position exactly once. Positions are the only
/// cross-reference; solutions are never looked up by value.
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. One comparator call per ordered pair `(p, q)`: when `p` dominates
///    `q`, `q` joins `p`'s dominated list; when `q` dominates `p`, `p`'s
///    domination count goes up.
/// 2. Solutions with a zero count form front 1.
/// 3. Peeling: processing a front decrements the counts of everything
///    its members dominate; counts that reach zero fill the next front.
///
/// # Complexity
///
/// O(N²) comparisons, O(N²) worst-case space for the dominated lists.
///
/// An empty population yields a single empty front.
pub fn non_dominated_sort(population: &mut [Solution]) -> Vec<Vec<usize>> {
    let n = population.len();

    let mut fronts: Vec<Vec<usize>> = vec![Vec::new()];
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut domination_count = vec![0usize; n];

    for p in 0..n {
        for q in 0..n {
            match dominates(&population[p], &population[q]) {
                Dominance::First => dominated[p].push(q),
                Dominance::Second => domination_count[p] += 1,
                Dominance::Neither => {}
            }
        }
        if domination_count[p] == 0 {
            fronts[0].push(p);
            population[p].rank = 1;
        }
    }

    let mut front_index = 1;
    while front_index <= fronts.len() {
        let current = fronts[front_index - 1].clone();
        for p in current {
            for &q in &dominated[p] {
                domination_count[q] -= 1;

                // No longer dominated by anything in earlier fronts:
                // q belongs to the next front.
                if domination_count[q] == 0 {
                    population[q].rank = front_index + 1;
                    if fronts.len() == front_index {
                        fronts.push(vec![q]);
                    } else {
                        fronts
                            .last_mut()
                            .expect("fronts starts non-empty and only grows")
                            .push(q);
                    }
                }
            }
        }
        front_index += 1;
    }

    fronts
}

// ============================================================================
// Tests
// ============================================================================
