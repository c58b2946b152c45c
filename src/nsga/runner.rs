//! Generation-loop execution.
//!
//! [`NsgaRunner`] drives the full evolutionary cycle: initialization →
//! evaluation → ranking → crowding → variation → merge → re-ranking →
//! truncation, repeated for a fixed number of generations.

use super::config::NsgaConfig;
use super::crowding::crowding_distance;
use super::init::{distinct_orderings, init_population};
use super::operators::{crossover, crowding_preference, mutation, select_mating_pool};
use super::sorting::non_dominated_sort;
use super::types::{GenomeRegistry, Solution};
use crate::assembly::ScoreMatrix;
use crate::error::AssemblyError;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Per-generation snapshot handed to observers and kept in the result
/// history.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number, starting at 1.
    pub generation: usize,

    /// Number of fronts in the merged parent+offspring population.
    pub front_count: usize,

    /// Rank-1 solutions surviving truncation.
    pub pareto_size: usize,

    /// Largest OAF in the surviving population.
    pub best_oaf: f64,

    /// Smallest ODF in the surviving population.
    pub best_odf: f64,
}

/// Result of a full optimization run.
#[derive(Debug, Clone)]
pub struct NsgaResult {
    /// Rank-1 (Pareto front) solutions of the final population.
    pub pareto_front: Vec<Solution>,

    /// The full final population.
    pub population: Vec<Solution>,

    /// Number of generations executed.
    pub generations: usize,

    /// Per-generation statistics.
    pub history: Vec<GenerationStats>,
}

/// Executes the NSGA-II generation loop over a fragment score matrix.
///
/// # Usage
///
/// ```no_run
/// use contig_assembly::assembly::{overlap_scores, read_fragments};
/// use contig_assembly::nsga::{NsgaConfig, NsgaRunner};
///
/// let fragments = read_fragments("benchmarks/test.data")?;
/// let scores = overlap_scores(&fragments);
/// let config = NsgaConfig::default().with_seed(42);
/// let result = NsgaRunner::run(&scores, &config)?;
/// for sol in &result.pareto_front {
///     println!("{:?} oaf={} odf={}", sol.genome, sol.oaf, sol.odf);
/// }
/// # Ok::<(), contig_assembly::error::AssemblyError>(())
/// ```
pub struct NsgaRunner;

impl NsgaRunner {
    /// Runs the optimization.
    ///
    /// # Errors
    ///
    /// Fails if the population size exceeds the permutation space of the
    /// fragment set, or if the initializer's attempt budget runs out.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`NsgaConfig::validate`] first to get a descriptive error).
    pub fn run(scores: &ScoreMatrix, config: &NsgaConfig) -> Result<NsgaResult, AssemblyError> {
        Self::run_with_observer(scores, config, |_| {})
    }

    /// Runs the optimization, invoking `observer` with each generation's
    /// statistics as they are produced.
    pub fn run_with_observer(
        scores: &ScoreMatrix,
        config: &NsgaConfig,
        mut observer: impl FnMut(&GenerationStats),
    ) -> Result<NsgaResult, AssemblyError> {
        config.validate().expect("invalid NsgaConfig");

        let fragment_count = scores.size();
        if let Some(available) = distinct_orderings(fragment_count) {
            if config.population_size as u128 > available {
                return Err(AssemblyError::PopulationCapacity {
                    requested: config.population_size,
                    available,
                    fragment_count,
                });
            }
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // The registry outlives initialization: offspring are checked
        // against everything the run has ever produced.
        let mut registry = GenomeRegistry::new();
        let attempt_limit = config
            .init_attempt_factor
            .saturating_mul(config.population_size);
        let mut population = init_population(
            fragment_count,
            config.population_size,
            &mut registry,
            attempt_limit,
            &mut rng,
        )?;

        let mut history = Vec::with_capacity(config.max_generations);

        for generation in 1..=config.max_generations {
            for sol in population.iter_mut() {
                sol.evaluate_oaf(scores);
                sol.evaluate_odf(scores);
            }

            let fronts = non_dominated_sort(&mut population);
            crowding_distance(&mut population, &fronts);

            let selection = select_mating_pool(&population, &mut rng);
            let mut offspring = crossover(
                &population,
                &selection,
                &mut registry,
                config.crossover_rate,
                generation,
                &mut rng,
            );
            offspring.extend(mutation(
                &population,
                &selection,
                &mut registry,
                config.mutation_rate,
                generation,
                &mut rng,
            ));
            for child in offspring.iter_mut() {
                child.evaluate_oaf(scores);
                child.evaluate_odf(scores);
            }

            // Merge, re-rank, re-score, and truncate back to size.
            population.extend(offspring);
            let fronts = non_dominated_sort(&mut population);
            crowding_distance(&mut population, &fronts);
            population = truncate(&population, &fronts, config.population_size);

            let stats = capture_stats(generation, fronts.len(), &population);
            observer(&stats);
            history.push(stats);
        }

        let pareto_front: Vec<Solution> =
            population.iter().filter(|s| s.rank == 1).cloned().collect();

        Ok(NsgaResult {
            pareto_front,
            population,
            generations: config.max_generations,
            history,
        })
    }
}

/// Keeps the best `size` solutions: whole fronts in rank order, and for
/// the front that would overflow, members in descending crowding
/// distance (the `-1` sentinel sorts first: "always retain").
fn truncate(population: &[Solution], fronts: &[Vec<usize>], size: usize) -> Vec<Solution> {
    let mut next = Vec::with_capacity(size);

    for front in fronts {
        let remaining = size - next.len();
        if remaining == 0 {
            break;
        }
        if front.len() <= remaining {
            next.extend(front.iter().map(|&p| population[p].clone()));
        } else {
            let mut by_crowding = front.clone();
            by_crowding.sort_by(|&a, &b| {
                crowding_preference(population[b].crowding_distance)
                    .partial_cmp(&crowding_preference(population[a].crowding_distance))
                    .expect("crowding preferences are never NaN")
            });
            next.extend(by_crowding[..remaining].iter().map(|&p| population[p].clone()));
        }
    }

    next
}

fn capture_stats(generation: usize, front_count: usize, population: &[Solution]) -> GenerationStats {
    let best_oaf = population.iter().map(|s| s.oaf).fold(f64::NEG_INFINITY, f64::max);
    let best_odf = population.iter().map(|s| s.odf).fold(f64::INFINITY, f64::min);
    GenerationStats {
        generation,
        front_count,
        pareto_size: population.iter().filter(|s| s.rank == 1).count(),
        best_oaf,
        best_odf,
    }
}

// ============================================================================
// Tests
// ============================================================================
