//! Signed-magnitude binary encoding of integer values.
//!
//! A [`Gene`] of precision `p` holds `p + 1` bits. Bit 0 is the sign flag
//! (`false` = non-negative), bits `1..=p` hold the magnitude with the most
//! significant bit first.
//!
//! ```
//! use binary_ga::ga::codec::{decode, encode};
//!
//! let gene = encode(5, 4).unwrap();
//! assert_eq!(gene.to_string(), "00101");
//! assert_eq!(decode(&gene), 5);
//! ```

use crate::error::{GaError, Result};
use std::fmt;

/// Widest magnitude the codec accepts.
///
/// Keeps every decoded magnitude, and `2^precision` itself, inside `i64`.
pub const MAX_PRECISION: usize = 62;

/// Fixed-length signed-magnitude bit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gene {
    bits: Vec<bool>,
}

impl Gene {
    /// Builds a gene from raw bits, sign flag first.
    ///
    /// # Panics
    /// Panics if `bits` is empty (there is no sign flag) or carries more
    /// than [`MAX_PRECISION`] magnitude bits.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        assert!(!bits.is_empty(), "gene needs at least a sign bit");
        assert!(
            bits.len() <= MAX_PRECISION + 1,
            "gene exceeds {MAX_PRECISION} magnitude bits"
        );
        Self { bits }
    }

    /// All bits, sign flag first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Magnitude bits, most significant first.
    pub fn magnitude_bits(&self) -> &[bool] {
        &self.bits[1..]
    }

    /// Total length (`precision + 1`).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always `false`; a gene carries at least its sign flag.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of magnitude bits.
    pub fn precision(&self) -> usize {
        self.bits.len() - 1
    }

    /// Whether the sign flag is set.
    pub fn is_negative(&self) -> bool {
        self.bits[0]
    }

    /// Flips magnitude bit `index` (0 = most significant).
    pub(crate) fn flip_magnitude_bit(&mut self, index: usize) {
        let bit = &mut self.bits[index + 1];
        *bit = !*bit;
    }

    /// Single-point exchange of magnitude bits at index `>= cut`.
    ///
    /// Each child keeps the sign flag of the parent it starts from.
    pub fn exchange_tail(&self, other: &Gene, cut: usize) -> (Gene, Gene) {
        debug_assert_eq!(self.len(), other.len(), "genes must have equal length");
        let split = (cut + 1).min(self.len());

        let mut left = self.bits[..split].to_vec();
        left.extend_from_slice(&other.bits[split..]);

        let mut right = other.bits[..split].to_vec();
        right.extend_from_slice(&self.bits[split..]);

        (Gene { bits: left }, Gene { bits: right })
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Encodes `value` with `precision` magnitude bits.
///
/// Fails with [`GaError::EncodingOverflow`] when `|value|` needs more than
/// `precision` bits; high bits are never dropped.
pub fn encode(value: i64, precision: usize) -> Result<Gene> {
    if precision > MAX_PRECISION {
        return Err(GaError::Configuration(format!(
            "precision {precision} exceeds the maximum of {MAX_PRECISION}"
        )));
    }

    let mut magnitude = value.unsigned_abs();
    if magnitude >> precision != 0 {
        return Err(GaError::EncodingOverflow { value, precision });
    }

    let mut bits = Vec::with_capacity(precision + 1);
    if magnitude == 0 {
        bits.resize(precision + 1, false);
        return Ok(Gene { bits });
    }

    // Least significant first, then reversed behind the sign flag.
    for _ in 0..precision {
        bits.push(magnitude & 1 == 1);
        magnitude >>= 1;
    }
    bits.push(value < 0);
    bits.reverse();

    Ok(Gene { bits })
}

/// Decodes a gene back to its signed value.
pub fn decode(gene: &Gene) -> i64 {
    let magnitude = gene
        .magnitude_bits()
        .iter()
        .fold(0i64, |acc, &bit| (acc << 1) | i64::from(bit));
    if gene.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}
