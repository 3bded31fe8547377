//! GA evolutionary loop execution.
//!
//! [`GaEngine`] owns the population and the random source for one run and
//! walks them through
//! fitness → selection → pairing → crossover → mutation → best tracking,
//! once per generation.

use super::chromosome::Chromosome;
use super::config::GaConfig;
use super::operators;
use super::population::Population;
use super::selection;
use super::types::Objective;
use crate::error::{GaError, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Lifecycle of a [`GaEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed, no population yet.
    Uninitialized,
    /// Initial population drawn, no generation run.
    Initialized,
    /// `generation` generations completed, more remain.
    Evolving { generation: usize },
    /// All configured generations completed.
    Terminated,
}

impl EngineState {
    fn name(&self) -> &'static str {
        match self {
            EngineState::Uninitialized => "uninitialized",
            EngineState::Initialized => "initialized",
            EngineState::Evolving { .. } => "evolving",
            EngineState::Terminated => "terminated",
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only view of one chromosome for progress rendering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChromosomeSnapshot {
    /// Decoded domain value.
    pub value: i64,
    /// Normalized fitness from the last fitness computation.
    pub fitness: f64,
    /// Gene bits, sign flag first, as `0`/`1` characters.
    pub bits: String,
}

impl From<&Chromosome> for ChromosomeSnapshot {
    fn from(c: &Chromosome) -> Self {
        Self {
            value: c.value(),
            fitness: c.fitness(),
            bits: c.gene().to_string(),
        }
    }
}

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best domain value found during the entire run.
    pub best_value: i64,

    /// Raw objective value of `best_value`.
    pub best_score: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best raw objective value after the initial population and after
    /// each generation. Never decreases.
    pub history: Vec<f64>,
}

#[derive(Debug, Clone, Copy)]
struct Best {
    value: i64,
    score: f64,
}

/// Executes the binary GA for one objective.
///
/// # Usage
///
/// ```
/// use binary_ga::ga::{GaConfig, GaEngine};
///
/// let config = GaConfig::default()
///     .with_precision(5)
///     .with_bounds(0, 30)
///     .with_seed(42);
/// let objective = |x: i64| (x * (30 - x)) as f64 + 1.0;
///
/// let mut engine = GaEngine::new(config, objective).unwrap();
/// engine.prepare().unwrap();
/// let result = engine.run().unwrap();
/// assert_eq!(Some(result.best_value), engine.max());
/// ```
pub struct GaEngine<O: Objective> {
    config: GaConfig,
    objective: O,
    rng: StdRng,
    population: Population,
    state: EngineState,
    generation: usize,
    best: Option<Best>,
    history: Vec<f64>,
}

impl<O: Objective> GaEngine<O> {
    /// Creates an engine after validating `config`.
    pub fn new(config: GaConfig, objective: O) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        debug!("ga engine seeded with {seed}");

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            population: Population::with_capacity(config.population_size),
            history: Vec::with_capacity(config.generations + 1),
            config,
            objective,
            state: EngineState::Uninitialized,
            generation: 0,
            best: None,
        })
    }

    /// Builds, prepares and runs an engine in one call.
    pub fn optimize(config: GaConfig, objective: O) -> Result<GaResult> {
        let mut engine = Self::new(config, objective)?;
        engine.prepare()?;
        engine.run()
    }

    /// Draws the initial population uniformly from the domain and records
    /// its best chromosome.
    pub fn prepare(&mut self) -> Result<()> {
        if self.state != EngineState::Uninitialized {
            return Err(self.wrong_state("uninitialized"));
        }

        let mut population = Population::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            let value = self.rng.random_range(self.config.domain());
            population.push(Chromosome::from_value(value, self.config.precision)?);
        }
        self.population = population;
        self.state = EngineState::Initialized;

        selection::compute_fitness(&mut self.population, &self.objective);
        self.track_best();
        self.record_history();
        debug!(
            "generation 0: best {:?}, population {:?}",
            self.max(),
            self.population.values()
        );
        Ok(())
    }

    /// Runs every remaining generation and returns the result.
    ///
    /// May be called after a number of [`step`](Self::step)s; the run picks
    /// up where they left off.
    pub fn run(&mut self) -> Result<GaResult> {
        match self.state {
            EngineState::Initialized | EngineState::Evolving { .. } => {}
            _ => return Err(self.wrong_state("initialized or evolving")),
        }
        while self.state != EngineState::Terminated {
            self.step()?;
        }
        self.result()
    }

    /// Runs exactly one generation.
    ///
    /// With zero configured generations this only moves the engine to
    /// [`EngineState::Terminated`].
    pub fn step(&mut self) -> Result<()> {
        match self.state {
            EngineState::Initialized | EngineState::Evolving { .. } => {}
            _ => return Err(self.wrong_state("initialized or evolving")),
        }
        if self.generation >= self.config.generations {
            self.state = EngineState::Terminated;
            return Ok(());
        }

        let domain = self.config.domain();

        // 1. Fitness shares are already current: `prepare` and the end of
        // the previous step compute them for the population as it stands.

        // 2. Roulette selection
        self.population = selection::select(&self.population, &mut self.rng);

        // 3. Pairing
        let population = std::mem::take(&mut self.population);
        self.population = selection::shuffle(population, &mut self.rng);

        // 4. Crossover
        let crossovers = operators::recombine(
            &mut self.population,
            self.config.crossover_rate,
            &domain,
            &mut self.rng,
        );

        // 5. Mutation
        let flips = operators::mutate(
            &mut self.population,
            self.config.mutation_rate,
            &domain,
            &mut self.rng,
        );

        // 6. Best tracking, with shares refreshed for the evolved population
        selection::compute_fitness(&mut self.population, &self.objective);
        self.track_best();
        self.generation += 1;
        self.record_history();

        if let Some(best) = self.best {
            debug!(
                "generation {}: best {} (score {}), {crossovers} crossovers, {flips} flips",
                self.generation, best.value, best.score
            );
            self.objective
                .on_generation(self.generation, best.value, best.score);
        }

        self.state = if self.generation < self.config.generations {
            EngineState::Evolving {
                generation: self.generation,
            }
        } else {
            EngineState::Terminated
        };
        Ok(())
    }

    /// Best domain value found so far; `None` before [`prepare`](Self::prepare).
    pub fn max(&self) -> Option<i64> {
        self.best.map(|b| b.value)
    }

    /// Raw objective value of [`max`](Self::max).
    pub fn max_score(&self) -> Option<f64> {
        self.best.map(|b| b.score)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Decoded values and fitness shares of the current population.
    ///
    /// Shares are computed for exactly these chromosomes, so they sum to 1
    /// unless the objective total was degenerate.
    pub fn snapshot(&self) -> Vec<ChromosomeSnapshot> {
        self.population.iter().map(ChromosomeSnapshot::from).collect()
    }

    /// Best raw objective value after each completed generation,
    /// starting with the initial population.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    fn result(&self) -> Result<GaResult> {
        let best = self
            .best
            .ok_or_else(|| self.wrong_state("initialized or evolving"))?;
        Ok(GaResult {
            best_value: best.value,
            best_score: best.score,
            generations: self.generation,
            history: self.history.clone(),
        })
    }

    /// Replaces the tracked best only on strict improvement, so the
    /// earliest chromosome wins ties.
    fn track_best(&mut self) {
        for chromosome in &self.population {
            let value = chromosome.value();
            let score = self.objective.evaluate(value);
            let improved = match self.best {
                None => true,
                Some(best) => score > best.score || (best.score.is_nan() && !score.is_nan()),
            };
            if improved {
                self.best = Some(Best { value, score });
            }
        }
    }

    fn record_history(&mut self) {
        if let Some(best) = self.best {
            self.history.push(best.score);
        }
    }

    fn wrong_state(&self, expected: &'static str) -> GaError {
        GaError::InvalidState {
            expected,
            actual: self.state.name(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn cubic(x: i64) -> f64 {
        let x = x as f64;
        x.powi(3) - 60.0 * x.powi(2) + 900.0 * x + 100.0
    }

    fn config() -> GaConfig {
        GaConfig::default()
            .with_precision(5)
            .with_bounds(0, 30)
            .with_generations(40)
            .with_seed(42)
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = GaEngine::new(config().with_population_size(5), cubic);
        assert!(matches!(result, Err(GaError::Configuration(_))));
    }

    #[test]
    fn test_lifecycle() {
        let mut engine = GaEngine::new(config().with_generations(3), cubic).unwrap();
        assert_eq!(engine.state(), EngineState::Uninitialized);
        assert_eq!(engine.max(), None);
        assert!(engine.snapshot().is_empty());

        engine.prepare().unwrap();
        assert_eq!(engine.state(), EngineState::Initialized);
        assert_eq!(engine.population().len(), 10);
        assert!(engine.max().is_some());

        engine.step().unwrap();
        assert_eq!(engine.state(), EngineState::Evolving { generation: 1 });
        engine.step().unwrap();
        assert_eq!(engine.state(), EngineState::Evolving { generation: 2 });
        engine.step().unwrap();
        assert_eq!(engine.state(), EngineState::Terminated);
        assert_eq!(engine.generation(), 3);
    }

    #[test]
    fn test_wrong_state_errors() {
        let mut engine = GaEngine::new(config(), cubic).unwrap();
        assert!(matches!(engine.run(), Err(GaError::InvalidState { .. })));
        assert!(matches!(engine.step(), Err(GaError::InvalidState { .. })));

        engine.prepare().unwrap();
        assert!(matches!(
            engine.prepare(),
            Err(GaError::InvalidState {
                actual: "initialized",
                ..
            })
        ));

        engine.run().unwrap();
        assert!(matches!(
            engine.run(),
            Err(GaError::InvalidState {
                actual: "terminated",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_generations() {
        let mut engine = GaEngine::new(config().with_generations(0), cubic).unwrap();
        engine.prepare().unwrap();
        let initial = engine.max();
        let result = engine.run().unwrap();
        assert_eq!(engine.state(), EngineState::Terminated);
        assert_eq!(result.generations, 0);
        assert_eq!(Some(result.best_value), initial);
        assert_eq!(result.history.len(), 1);
    }

    #[test]
    fn test_initial_population_in_domain() {
        let mut engine = GaEngine::new(config().with_bounds(-7, 19), cubic).unwrap();
        engine.prepare().unwrap();
        for c in engine.population() {
            assert!((-7..=19).contains(&c.value()));
            assert_eq!(c.gene().len(), 6);
        }
    }

    #[test]
    fn test_initial_best_is_population_maximum() {
        let mut engine = GaEngine::new(config(), cubic).unwrap();
        engine.prepare().unwrap();
        let expected = engine
            .population()
            .iter()
            .map(|c| cubic(c.value()))
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(engine.max_score(), Some(expected));
        assert_eq!(cubic(engine.max().unwrap()), expected);
    }

    #[test]
    fn test_ties_keep_first_found() {
        let mut engine = GaEngine::new(config(), |_: i64| 1.0).unwrap();
        engine.prepare().unwrap();
        let first = engine.population()[0].value();
        assert_eq!(engine.max(), Some(first));
        engine.run().unwrap();
        assert_eq!(engine.max(), Some(first));
    }

    #[test]
    fn test_population_invariants_every_generation() {
        let mut engine = GaEngine::new(
            config().with_bounds(3, 27).with_mutation_rate(0.2),
            cubic,
        )
        .unwrap();
        engine.prepare().unwrap();
        while engine.state() != EngineState::Terminated {
            engine.step().unwrap();
            assert_eq!(engine.population().len(), 10);
            for c in engine.population() {
                assert!((3..=27).contains(&c.value()));
            }
        }
    }

    #[test]
    fn test_history_is_monotonic() {
        let result = GaEngine::optimize(config().with_mutation_rate(0.1), cubic).unwrap();
        assert_eq!(result.history.len(), 41);
        for window in result.history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best score regressed: {} -> {}",
                window[0],
                window[1]
            );
        }
        assert_eq!(*result.history.last().unwrap(), result.best_score);
    }

    #[test]
    fn test_seed_reproducibility() {
        let a = GaEngine::optimize(config(), cubic).unwrap();
        let b = GaEngine::optimize(config(), cubic).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_objective_still_runs() {
        let mut engine = GaEngine::new(config(), |_: i64| 0.0).unwrap();
        engine.prepare().unwrap();
        engine.step().unwrap();
        for s in engine.snapshot() {
            assert!((s.fitness - 0.1).abs() < 1e-12);
        }
        let result = engine.run().unwrap();
        assert_eq!(result.generations, 40);
        assert!(result.best_score == 0.0);
    }

    #[test]
    fn test_on_generation_called_each_generation() {
        struct Counting {
            calls: Cell<usize>,
        }

        impl Objective for Counting {
            fn evaluate(&self, value: i64) -> f64 {
                value as f64 + 1.0
            }

            fn on_generation(&self, generation: usize, _best: i64, _score: f64) {
                assert_eq!(generation, self.calls.get() + 1);
                self.calls.set(generation);
            }
        }

        let mut engine = GaEngine::new(
            config().with_generations(12),
            Counting {
                calls: Cell::new(0),
            },
        )
        .unwrap();
        engine.prepare().unwrap();
        engine.run().unwrap();
        assert_eq!(engine.objective.calls.get(), 12);
    }

    #[test]
    fn test_snapshot_fitness_matches_current_values() {
        let mut engine = GaEngine::new(
            config().with_crossover_rate(1.0).with_mutation_rate(0.2).with_seed(5),
            cubic,
        )
        .unwrap();
        engine.prepare().unwrap();

        for _ in 0..5 {
            let snapshot = engine.snapshot();
            let total: f64 = snapshot.iter().map(|s| cubic(s.value)).sum();
            for s in &snapshot {
                let expected = cubic(s.value) / total;
                assert!(
                    (s.fitness - expected).abs() < 1e-12,
                    "value {} has share {}, expected {expected}",
                    s.value,
                    s.fitness
                );
            }
            let sum: f64 = snapshot.iter().map(|s| s.fitness).sum();
            assert!((sum - 1.0).abs() < 1e-9);
            engine.step().unwrap();
        }
    }

    #[test]
    fn test_snapshot_matches_population() {
        let mut engine = GaEngine::new(config(), cubic).unwrap();
        engine.prepare().unwrap();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.len(), 10);
        for (s, c) in snapshot.iter().zip(engine.population()) {
            assert_eq!(s.value, c.value());
            assert_eq!(s.bits, c.gene().to_string());
        }
    }

    #[test]
    fn test_state_display() {
        assert_eq!(EngineState::Uninitialized.to_string(), "uninitialized");
        assert_eq!(
            EngineState::Evolving { generation: 4 }.to_string(),
            "evolving"
        );
    }
}
