//! Binary-encoded Genetic Algorithm.
//!
//! Maximizes a caller-supplied [`Objective`] over an inclusive integer
//! domain. Candidate values are stored as signed-magnitude bit strings
//! ([`codec::Gene`]) and evolved with fitness-proportional selection,
//! bounded single-point crossover and bounded per-bit mutation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (precision, bounds, rates, seed)
//! - [`GaEngine`]: Owns the population and random source, executes the loop
//! - [`GaResult`]: Best value found plus its per-generation history
//!
//! # Submodules
//!
//! - [`codec`]: Signed-magnitude encode/decode
//! - [`selection`]: Fitness normalization, roulette wheel, pairing shuffle
//! - [`operators`]: Domain-preserving crossover and mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
pub mod codec;
mod config;
pub mod operators;
mod population;
mod runner;
pub mod selection;
mod types;

pub use chromosome::Chromosome;
pub use codec::Gene;
pub use config::GaConfig;
pub use population::Population;
pub use runner::{ChromosomeSnapshot, EngineState, GaEngine, GaResult};
pub use types::Objective;
