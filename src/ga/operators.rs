//! Domain-preserving crossover and mutation on signed-magnitude genes.
//!
//! Both operators speculate and then validate: a change is kept only if
//! every affected chromosome still decodes inside the search domain.
//!
//! # Crossover
//!
//! - [`bounded_crossover`]: single-point exchange of magnitude bits,
//!   committed only when both children are in range
//! - [`recombine`]: applies it to adjacent pairs with a fixed probability
//!
//! # Mutation
//!
//! - [`bounded_mutation`]: per-bit flips, each reverted on its own if it
//!   leaves the domain
//! - [`mutate`]: applies it to every chromosome

use super::chromosome::Chromosome;
use super::codec;
use super::population::Population;
use log::trace;
use rand::Rng;
use std::ops::RangeInclusive;

/// What happened to one crossover attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverOutcome {
    /// Both parents were replaced by their children.
    Committed { cut: usize },
    /// At least one child fell outside the domain; parents are untouched.
    Rejected { cut: usize },
}

impl CrossoverOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, CrossoverOutcome::Committed { .. })
    }
}

/// Single-point crossover bounded by `domain`.
///
/// Picks a cut uniformly in `[0, precision)` and swaps the magnitude bits
/// at index `>= cut`. Sign flags stay with their parents. The swap is
/// committed only when both children decode inside `domain`.
///
/// # Panics
/// Panics if the parents' genes have different lengths.
pub fn bounded_crossover<R: Rng>(
    a: &mut Chromosome,
    b: &mut Chromosome,
    domain: &RangeInclusive<i64>,
    rng: &mut R,
) -> CrossoverOutcome {
    let precision = a.gene().precision();
    assert_eq!(
        precision,
        b.gene().precision(),
        "parents must have equal precision"
    );
    if precision == 0 {
        return CrossoverOutcome::Rejected { cut: 0 };
    }

    let cut = rng.random_range(0..precision);
    let (left, right) = a.gene().exchange_tail(b.gene(), cut);
    let (lv, rv) = (codec::decode(&left), codec::decode(&right));

    if domain.contains(&lv) && domain.contains(&rv) {
        trace!(
            "crossover at {cut}: ({}, {}) -> ({lv}, {rv})",
            a.value(),
            b.value()
        );
        a.replace_gene(left);
        b.replace_gene(right);
        CrossoverOutcome::Committed { cut }
    } else {
        CrossoverOutcome::Rejected { cut }
    }
}

/// Attempts crossover on each pair `(2i, 2i + 1)` with probability `rate`.
///
/// Returns the number of committed crossovers. An odd trailing chromosome
/// is left alone.
pub fn recombine<R: Rng>(
    population: &mut Population,
    rate: f64,
    domain: &RangeInclusive<i64>,
    rng: &mut R,
) -> usize {
    let mut committed = 0;
    for pair in 0..population.len() / 2 {
        if rng.random_range(0.0..1.0) < rate {
            let (a, b) = population.pair_mut(pair);
            if bounded_crossover(a, b, domain, rng).is_committed() {
                committed += 1;
            }
        }
    }
    committed
}

/// Flips each magnitude bit with probability `rate`.
///
/// Every flip is validated immediately: if the chromosome no longer
/// decodes inside `domain`, that single bit is flipped back. The sign
/// flag is never touched. Returns the number of flips kept.
pub fn bounded_mutation<R: Rng>(
    chromosome: &mut Chromosome,
    rate: f64,
    domain: &RangeInclusive<i64>,
    rng: &mut R,
) -> usize {
    let mut kept = 0;
    for bit in 0..chromosome.gene().precision() {
        if rng.random_range(0.0..1.0) < rate {
            chromosome.gene_mut().flip_magnitude_bit(bit);
            if domain.contains(&chromosome.value()) {
                kept += 1;
            } else {
                chromosome.gene_mut().flip_magnitude_bit(bit);
            }
        }
    }
    kept
}

/// Applies [`bounded_mutation`] to every chromosome.
///
/// Returns the total number of flips kept.
pub fn mutate<R: Rng>(
    population: &mut Population,
    rate: f64,
    domain: &RangeInclusive<i64>,
    rng: &mut R,
) -> usize {
    population
        .iter_mut()
        .map(|c| bounded_mutation(c, rate, domain, rng))
        .sum()
}
