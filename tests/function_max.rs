//! End-to-end runs of the engine on the cubic test function.

use binary_ga::ga::{EngineState, GaConfig, GaEngine};

fn cubic(x: i64) -> f64 {
    let x = x as f64;
    x.powi(3) - 60.0 * x.powi(2) + 900.0 * x + 100.0
}

fn config(seed: u64) -> GaConfig {
    GaConfig::default()
        .with_precision(5)
        .with_bounds(0, 30)
        .with_generations(40)
        .with_seed(seed)
}

#[test]
fn best_never_regresses_below_generation_zero() {
    for seed in [1, 7, 42, 1234, 99_999] {
        let mut engine = GaEngine::new(config(seed), cubic).unwrap();
        engine.prepare().unwrap();
        let initial = engine.max_score().unwrap();

        let mut previous = initial;
        while engine.state() != EngineState::Terminated {
            engine.step().unwrap();
            let current = engine.max_score().unwrap();
            assert!(current >= previous, "seed {seed}: {previous} -> {current}");
            previous = current;
        }

        let best = engine.max().unwrap();
        assert!((0..=30).contains(&best));
        assert!(cubic(best) >= initial);
    }
}

#[test]
fn best_stabilizes_over_final_generations() {
    for seed in [3, 42, 2024] {
        let result = GaEngine::optimize(config(seed), cubic).unwrap();
        assert_eq!(result.generations, 40);
        assert_eq!(result.history.len(), 41);

        let tail = &result.history[result.history.len() - 5..];
        assert!(
            tail.iter().all(|&s| s == tail[0]),
            "seed {seed}: best still improving in final generations: {tail:?}"
        );
        assert!(tail[0] <= cubic(10));
    }
}

#[test]
fn larger_population_finds_optimum() {
    // f peaks at x = 10 on [0, 30] (f(10) = 4100).
    let result = GaEngine::optimize(
        config(42)
            .with_population_size(40)
            .with_generations(60)
            .with_mutation_rate(0.05),
        cubic,
    )
    .unwrap();
    assert!(
        result.best_score >= cubic(8).min(cubic(12)),
        "expected a value within 2 of 10, got {} (f = {})",
        result.best_value,
        result.best_score
    );
}

#[test]
fn negative_domain_is_respected() {
    let objective = |x: i64| (100 - (x + 12) * (x + 12)) as f64 + 1000.0;
    let mut engine = GaEngine::new(
        GaConfig::default()
            .with_precision(6)
            .with_bounds(-40, -5)
            .with_generations(30)
            .with_mutation_rate(0.05)
            .with_seed(11),
        objective,
    )
    .unwrap();
    engine.prepare().unwrap();
    while engine.state() != EngineState::Terminated {
        engine.step().unwrap();
        for snapshot in engine.snapshot() {
            assert!((-40..=-5).contains(&snapshot.value));
            assert!(snapshot.bits.starts_with('1'));
        }
    }
}
