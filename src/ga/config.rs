//! GA configuration.
//!
//! [`GaConfig`] holds every parameter that stays fixed for one engine run.

use super::codec::MAX_PRECISION;
use crate::error::{GaError, Result};
use std::ops::RangeInclusive;

/// Configuration for the binary-encoded Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use binary_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.generations, 40);
/// assert_eq!(config.domain(), 0..=30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use binary_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_precision(5)
///     .with_bounds(-10, 20)
///     .with_crossover_rate(0.7)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of magnitude bits per gene.
    ///
    /// Bounds the representable domain to `(-2^precision, 2^precision)`.
    pub precision: usize,

    /// Inclusive lower bound of the search domain.
    pub lower: i64,

    /// Inclusive upper bound of the search domain.
    pub upper: i64,

    /// Number of generations executed by a full run.
    pub generations: usize,

    /// Number of chromosomes per generation. Must be even and at least 2.
    pub population_size: usize,

    /// Probability of attempting crossover on an adjacent pair (0.0–1.0).
    pub crossover_rate: f64,

    /// Per-bit flip probability during mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            precision: 10,
            lower: 0,
            upper: 30,
            generations: 40,
            population_size: 10,
            crossover_rate: 0.6,
            mutation_rate: 0.005,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the number of magnitude bits.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the inclusive domain bounds.
    pub fn with_bounds(mut self, lower: i64, upper: i64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover probability.
    ///
    /// Stored as given; out-of-range values are rejected by [`validate`](Self::validate).
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-bit mutation probability.
    ///
    /// Stored as given; out-of-range values are rejected by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The inclusive search domain `lower..=upper`.
    pub fn domain(&self) -> RangeInclusive<i64> {
        self.lower..=self.upper
    }

    /// Validates the configuration.
    ///
    /// Returns [`GaError::Configuration`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.precision == 0 {
            return Err(invalid("precision must be at least 1"));
        }
        if self.precision > MAX_PRECISION {
            return Err(invalid(format!(
                "precision must be at most {MAX_PRECISION}"
            )));
        }
        if self.lower > self.upper {
            return Err(invalid(format!(
                "lower bound {} exceeds upper bound {}",
                self.lower, self.upper
            )));
        }
        let limit = 1i64 << self.precision;
        for bound in [self.lower, self.upper] {
            if bound.unsigned_abs() >= limit.unsigned_abs() {
                return Err(invalid(format!(
                    "bound {bound} is not representable with {} magnitude bits",
                    self.precision
                )));
            }
        }
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.population_size % 2 != 0 {
            return Err(invalid("population_size must be even"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(invalid("crossover_rate must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be within [0, 1]"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> GaError {
    GaError::Configuration(msg.into())
}
