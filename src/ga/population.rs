//! Ordered collection of chromosomes forming one generation.

use super::chromosome::Chromosome;
use crate::error::Result;
use std::fmt;
use std::ops::Index;

/// Chromosomes in insertion order.
///
/// No deduplication is performed; several chromosomes may carry identical
/// genes.
#[derive(Debug, Clone, Default)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chromosomes: Vec::with_capacity(capacity),
        }
    }

    /// Encodes every value with `precision` magnitude bits.
    pub fn from_values<I>(values: I, precision: usize) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        values
            .into_iter()
            .map(|v| Chromosome::from_value(v, precision))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Chromosome> {
        self.chromosomes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.chromosomes.iter()
    }

    pub fn as_slice(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Appends a chromosome. Only used while rebuilding a generation.
    pub fn push(&mut self, chromosome: Chromosome) {
        self.chromosomes.push(chromosome);
    }

    /// Decoded values in order.
    pub fn values(&self) -> Vec<i64> {
        self.chromosomes.iter().map(Chromosome::value).collect()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Chromosome> {
        self.chromosomes.iter_mut()
    }

    /// Mutable access to the adjacent pair `(2 * pair, 2 * pair + 1)`.
    pub(crate) fn pair_mut(&mut self, pair: usize) -> (&mut Chromosome, &mut Chromosome) {
        let (head, tail) = self.chromosomes.split_at_mut(2 * pair + 1);
        (&mut head[2 * pair], &mut tail[0])
    }

    pub(crate) fn into_vec(self) -> Vec<Chromosome> {
        self.chromosomes
    }
}

impl Index<usize> for Population {
    type Output = Chromosome;

    fn index(&self, index: usize) -> &Chromosome {
        &self.chromosomes[index]
    }
}

impl FromIterator<Chromosome> for Population {
    fn from_iter<T: IntoIterator<Item = Chromosome>>(iter: T) -> Self {
        Self {
            chromosomes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.iter()
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chromosome in &self.chromosomes {
            writeln!(f, "{chromosome}")?;
        }
        Ok(())
    }
}
