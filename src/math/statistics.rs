//! Exact per-band moments and population standard deviations
//!
//! Band samples are bytes, so sums and sums of squares are accumulated in
//! integers. Two moment sets combine by addition, which makes the statistics of
//! a merged segment independent of pixel order and lets merge costs come out
//! bit-for-bit symmetric.

use crate::io::error::{Result, construction_error};

/// Sample count plus per-band sums and sums of squares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandMoments {
    count: u64,
    sums: Vec<u64>,
    squared_sums: Vec<u128>,
}

impl BandMoments {
    /// Accumulate moments from band-major sample columns (`[bands][pixels]`)
    ///
    /// # Errors
    ///
    /// Returns a construction error if there are no bands, no samples, or the
    /// columns disagree on the number of samples
    pub fn from_band_columns(columns: &[Vec<u8>]) -> Result<Self> {
        let Some(first) = columns.first() else {
            return Err(construction_error(&"no band data"));
        };
        if first.is_empty() {
            return Err(construction_error(&"no samples in band columns"));
        }
        if columns.iter().any(|column| column.len() != first.len()) {
            return Err(construction_error(&"band columns have different lengths"));
        }

        let sums = columns
            .iter()
            .map(|column| column.iter().map(|&v| u64::from(v)).sum())
            .collect();
        let squared_sums = columns
            .iter()
            .map(|column| {
                column
                    .iter()
                    .map(|&v| u128::from(v) * u128::from(v))
                    .sum()
            })
            .collect();

        Ok(Self {
            count: first.len() as u64,
            sums,
            squared_sums,
        })
    }

    /// Moments of the union of two disjoint sample sets
    ///
    /// # Errors
    ///
    /// Returns a construction error if the band counts differ
    pub fn combine(&self, other: &Self) -> Result<Self> {
        if self.band_count() != other.band_count() {
            return Err(construction_error(&format!(
                "cannot combine {} bands with {} bands",
                self.band_count(),
                other.band_count()
            )));
        }

        Ok(Self {
            count: self.count + other.count,
            sums: self
                .sums
                .iter()
                .zip(&other.sums)
                .map(|(a, b)| a + b)
                .collect(),
            squared_sums: self
                .squared_sums
                .iter()
                .zip(&other.squared_sums)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Number of colour bands
    pub const fn band_count(&self) -> usize {
        self.sums.len()
    }

    /// Number of samples per band
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Population standard deviation of each band
    ///
    /// Variance is `(n * sum(x^2) - sum(x)^2) / n^2`, the mean squared
    /// deviation from the mean evaluated without intermediate rounding.
    pub fn population_std_devs(&self) -> Vec<f64> {
        let n = u128::from(self.count);
        let denominator = (self.count as f64) * (self.count as f64);

        self.sums
            .iter()
            .zip(&self.squared_sums)
            .map(|(&sum, &squared_sum)| {
                let sum = u128::from(sum);
                // Cauchy-Schwarz keeps this non-negative; saturate regardless
                let numerator = (n * squared_sum).saturating_sub(sum * sum);
                (numerator as f64 / denominator).sqrt()
            })
            .collect()
    }
}

