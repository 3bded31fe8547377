//! Error types shared by the codec and the evolution engine.

use thiserror::Error;

/// Errors surfaced to callers of the codec and of [`GaEngine`](crate::ga::GaEngine).
///
/// Degenerate fitness totals and roulette rounding misses are recovered
/// inside the engine and never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaError {
    /// The configuration cannot drive a run.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The magnitude of `value` needs more than `precision` bits.
    #[error("value {value} does not fit in {precision} magnitude bits")]
    EncodingOverflow { value: i64, precision: usize },

    /// An engine operation was called in the wrong lifecycle state.
    #[error("engine is {actual}, expected {expected}")]
    InvalidState {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;
