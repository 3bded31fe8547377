//! Binary-encoded genetic algorithm for integer function maximization.
//!
//! The engine searches an inclusive integer domain for the value that
//! maximizes a caller-supplied objective:
//!
//! - **Codec**: signed-magnitude bit strings with a fixed magnitude width
//! - **Chromosome / Population**: a gene with its fitness share, and one
//!   fixed-size generation of them
//! - **Engine**: fitness normalization, roulette-wheel selection, pairing,
//!   bounded crossover and mutation, and best tracking, driven by one
//!   seedable random source
//!
//! ```
//! use binary_ga::ga::{GaConfig, GaEngine};
//!
//! let config = GaConfig::default().with_precision(5).with_seed(7);
//! let result = GaEngine::optimize(config, |x: i64| {
//!     let x = x as f64;
//!     x.powi(3) - 60.0 * x.powi(2) + 900.0 * x + 100.0
//! })
//! .unwrap();
//! assert!((0..=30).contains(&result.best_value));
//! ```
//!
//! The crate logs through the `log` facade and installs no logger.

pub mod error;
pub mod ga;

pub use error::{GaError, Result};
