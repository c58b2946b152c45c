//! Optimizer configuration.
//!
//! [`NsgaConfig`] holds all parameters that control the generation loop.

/// Configuration for the NSGA-II fragment-ordering search.
///
/// # Defaults
///
/// ```
/// use contig_assembly::nsga::NsgaConfig;
///
/// let config = NsgaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use contig_assembly::nsga::NsgaConfig;
///
/// let config = NsgaConfig::default()
///     .with_population_size(200)
///     .with_crossover_rate(0.85)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NsgaConfig {
    /// Number of solutions kept after each generation's truncation.
    ///
    /// Must not exceed the number of distinct orderings of the fragment
    /// set; the runner rejects configurations that do.
    pub population_size: usize,

    /// Number of generations to run. The loop always runs to completion.
    pub max_generations: usize,

    /// Probability of recombining a mating pair (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of mutating a selected solution (0.0–1.0).
    pub mutation_rate: f64,

    /// Attempt budget multiplier for the population initializer.
    ///
    /// The initializer draws at most
    /// `init_attempt_factor * population_size` random permutations before
    /// failing with a sampling-exhausted error. Raise this when the
    /// population size approaches the permutation-space limit for a small
    /// fragment count.
    pub init_attempt_factor: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for NsgaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            init_attempt_factor: 1000,
            seed: None,
        }
    }
}

impl NsgaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the initializer attempt budget multiplier.
    pub fn with_init_attempt_factor(mut self, factor: usize) -> Self {
        self.init_attempt_factor = factor;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.init_attempt_factor == 0 {
            return Err("init_attempt_factor must be at least 1".into());
        }
        Ok(())
    }
}
