//! Fitness normalization, roulette-wheel selection and pairing.
//!
//! One generation runs [`compute_fitness`], then [`select`] (remainder
//! stochastic sampling over the normalized shares), then [`shuffle`] to
//! decide which chromosomes sit next to each other for crossover.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Baker (1987), "Reducing Bias and Inefficiency in the Selection Algorithm"

use super::population::Population;
use super::types::Objective;
use log::{debug, warn};
use rand::Rng;

/// How the last [`compute_fitness`] call normalized the population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// Each fitness is the chromosome's share of a positive total.
    Proportional { total: f64 },
    /// The total was not a positive finite number; every chromosome got
    /// `1 / len` instead.
    Uniform { total: f64 },
}

/// Sets every chromosome's fitness to its share of the population total.
///
/// A non-positive (or non-finite) total would produce NaN or infinite
/// shares. In that case every chromosome receives the same share and the
/// condition is reported through the returned [`Normalization`].
pub fn compute_fitness<O>(population: &mut Population, objective: &O) -> Normalization
where
    O: Objective + ?Sized,
{
    let scores: Vec<f64> = population
        .iter()
        .map(|c| objective.evaluate(c.value()))
        .collect();
    let total: f64 = scores.iter().sum();

    if total > 0.0 && total.is_finite() {
        for (chromosome, score) in population.iter_mut().zip(scores) {
            chromosome.set_fitness(score / total);
        }
        Normalization::Proportional { total }
    } else {
        warn!("degenerate fitness total {total}, falling back to uniform shares");
        let share = 1.0 / population.len() as f64;
        for chromosome in population.iter_mut() {
            chromosome.set_fitness(share);
        }
        Normalization::Uniform { total }
    }
}

/// Draws a new population of the same size by roulette wheel.
///
/// Each slot samples `p` in `[0, 1)` and takes the first chromosome whose
/// cumulative fitness exceeds `p`. Winners are copied, so the result never
/// aliases the input. If rounding leaves the wheel short of `p`, the last
/// chromosome is taken.
pub fn select<R: Rng>(population: &Population, rng: &mut R) -> Population {
    let n = population.len();
    let mut cumulative = 0.0;
    let wheel: Vec<f64> = population
        .iter()
        .map(|c| {
            cumulative += c.fitness();
            cumulative
        })
        .collect();

    let mut next = Population::with_capacity(n);
    for _ in 0..n {
        let p: f64 = rng.random_range(0.0..1.0);
        next.push(population[spin(&wheel, p)].clone());
    }
    next
}

/// Index of the first bucket whose cumulative fitness exceeds `p`.
fn spin(wheel: &[f64], p: f64) -> usize {
    match wheel.iter().position(|&edge| edge > p) {
        Some(idx) => idx,
        None => {
            debug!("roulette sample {p} beyond wheel edge, taking last index");
            wheel.len().saturating_sub(1)
        }
    }
}

/// Reorders the population by a random permutation.
///
/// Indices are drawn uniformly from `[0, n)` and duplicates are rejected
/// until all `n` positions are collected.
pub fn shuffle<R: Rng>(population: Population, rng: &mut R) -> Population {
    let n = population.len();
    let order = random_permutation(n, rng);

    let mut slots: Vec<Option<_>> = population.into_vec().into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|idx| slots[idx].take())
        .collect()
}

fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut seen = vec![false; n];
    let mut order = Vec::with_capacity(n);
    while order.len() < n {
        let idx = rng.random_range(0..n);
        if !seen[idx] {
            seen[idx] = true;
            order.push(idx);
        }
    }
    order
}
