//! The objective contract between the engine and the caller.

/// A scalar objective to maximize over integer domain values.
///
/// Any `Fn(i64) -> f64` is an objective:
///
/// ```
/// use binary_ga::ga::Objective;
///
/// let square = |x: i64| (x * x) as f64;
/// assert_eq!(square.evaluate(3), 9.0);
/// ```
///
/// Fitness-proportional selection divides by the population total, so
/// objectives should be non-negative over the configured domain. A
/// non-positive total is tolerated but degrades selection to uniform.
pub trait Objective {
    /// Raw objective value of `value`. Expected to be pure.
    fn evaluate(&self, value: i64) -> f64;

    /// Called after each generation with the best value found so far.
    ///
    /// Useful for progress reporting. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_value: i64, _best_score: f64) {}
}

impl<F> Objective for F
where
    F: Fn(i64) -> f64,
{
    fn evaluate(&self, value: i64) -> f64 {
        self(value)
    }
}
