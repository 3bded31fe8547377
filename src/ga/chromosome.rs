//! A gene paired with its per-generation fitness share.

use super::codec::{self, Gene};
use crate::error::Result;
use std::fmt;

/// One candidate solution.
///
/// The gene only changes through the engine's crossover and mutation
/// operators. `fitness` is transient: the engine overwrites it once per
/// generation and it means nothing outside that generation.
#[derive(Debug, Clone)]
pub struct Chromosome {
    gene: Gene,
    fitness: f64,
}

impl Chromosome {
    /// Wraps an existing gene with zero fitness.
    pub fn new(gene: Gene) -> Self {
        Self { gene, fitness: 0.0 }
    }

    /// Encodes `value` with `precision` magnitude bits.
    pub fn from_value(value: i64, precision: usize) -> Result<Self> {
        Ok(Self::new(codec::encode(value, precision)?))
    }

    pub fn gene(&self) -> &Gene {
        &self.gene
    }

    /// Decoded domain value.
    pub fn value(&self) -> i64 {
        codec::decode(&self.gene)
    }

    /// Normalized fitness from the last fitness computation.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    pub(crate) fn replace_gene(&mut self, gene: Gene) {
        self.gene = gene;
    }

    pub(crate) fn gene_mut(&mut self) -> &mut Gene {
        &mut self.gene
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chromosome: {}, string: {}", self.value(), self.gene)
    }
}
