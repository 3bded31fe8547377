//! Maximizes f(x) = x^3 - 60x^2 + 900x + 100 over [0, 30].
//!
//! Run with `RUST_LOG=debug cargo run --example function_max` to see the
//! engine's per-generation log lines as well.

use binary_ga::ga::{GaConfig, GaEngine};
use binary_ga::Result;

fn cubic(x: i64) -> f64 {
    let x = x as f64;
    x.powi(3) - 60.0 * x.powi(2) + 900.0 * x + 100.0
}

fn main() -> Result<()> {
    env_logger::init();

    let config = GaConfig::default().with_precision(10).with_bounds(0, 30);
    let mut engine = GaEngine::new(config, cubic)?;
    engine.prepare()?;
    print!("{}", engine.population());

    while engine.state() != binary_ga::ga::EngineState::Terminated {
        engine.step()?;
        println!("next generation:");
        print!("{}", engine.population());
    }

    if let (Some(best), Some(score)) = (engine.max(), engine.max_score()) {
        println!("optimal: {best} (f = {score})");
    }
    Ok(())
}
