#![allow(dead_code)]
//! Weighted letter sampling from a seeded random source
//!
//! Draws map a uniform integer in `[1, total_weight]` onto the catalog
//! through a cumulative weight table, so a given random stream always
//! produces the same letters.

use super::catalog::{self, Letter};
use chrono::{Datelike, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// A random stream that also yields uniform floats in `[0, 1)`.
pub trait RandomSource: RngCore {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl<R: RngCore> RandomSource for R {}

/// Seed string for a calendar day: zero-based month, day, full year.
pub fn daily_seed(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month0(), date.day(), date.year())
}

/// Seed string for the current UTC date.
pub fn today_seed() -> String {
    daily_seed(Utc::now().date_naive())
}

/// Build a deterministic RNG from a seed string.
pub fn seeded_rng(seed: &str) -> StdRng {
    // FNV-1a keeps the string -> u64 mapping stable across builds.
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in seed.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    StdRng::seed_from_u64(hash)
}

/// Running totals of catalog weights, one entry per letter.
#[derive(Debug, Clone)]
pub struct CumulativeWeights {
    totals: Vec<u32>,
}

impl CumulativeWeights {
    pub fn from_catalog() -> Self {
        let mut running = 0;
        let totals = catalog::all_letters()
            .map(|letter| {
                running += letter.weight();
                running
            })
            .collect();
        Self { totals }
    }

    pub fn total(&self) -> u32 {
        self.totals.last().copied().unwrap_or(0)
    }

    /// Index of the first entry with `x <= totals[i]`.
    pub fn index_for(&self, x: u32) -> usize {
        self.totals
            .partition_point(|&t| t < x)
            .min(self.totals.len() - 1)
    }

    pub fn totals(&self) -> &[u32] {
        &self.totals
    }
}

/// Draws single letters according to catalog weights.
#[derive(Debug)]
pub struct WeightedSampler<R> {
    table: CumulativeWeights,
    letters: Vec<Letter>,
    random: R,
}

impl<R: RandomSource> WeightedSampler<R> {
    pub fn new(random: R) -> Self {
        Self {
            table: CumulativeWeights::from_catalog(),
            letters: catalog::all_letters().collect(),
            random,
        }
    }

    /// Draw one letter.
    pub fn sample_one(&mut self) -> Letter {
        let total = self.table.total();
        let scaled = (self.random.next_f64() * f64::from(total)).floor() as u32 + 1;
        let x = scaled.clamp(1, total);
        self.letters[self.table.index_for(x)]
    }

    /// The underlying stream, for draws that are not letters.
    pub fn rng(&mut self) -> &mut R {
        &mut self.random
    }
}

/// Replays a fixed list of floats, cycling when exhausted.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRandom {
    values: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

/// Each `next_u64` carries one scripted float in its top 53 bits, which is
/// exactly what `rand` reads back when it draws an `f64`.
#[cfg(test)]
impl RngCore for ScriptedRandom {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        ((value * (1u64 << 53) as f64) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_cumulative_table_shape() {
        let table = CumulativeWeights::from_catalog();
        assert_eq!(table.totals().len(), 26);
        assert!(table.totals().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(table.total(), catalog::total_weight());
        assert_eq!(&table.totals()[..3], &[9, 11, 13]);
    }

    #[test]
    fn test_index_matches_linear_scan() {
        let table = CumulativeWeights::from_catalog();
        for x in 1..=table.total() {
            let linear = table.totals().iter().position(|&t| x <= t).unwrap();
            assert_eq!(table.index_for(x), linear, "x = {}", x);
        }
    }

    #[test]
    fn test_scripted_draws_hit_expected_letters() {
        // 0.0 -> x=1 -> A; 9.5/98 -> x=10 -> B; just under 1 -> x=98 -> Z
        let random = ScriptedRandom::new(vec![0.0, 9.5 / 98.0, 0.999_999]);
        let mut sampler = WeightedSampler::new(random);
        assert_eq!(sampler.sample_one().as_char(), 'A');
        assert_eq!(sampler.sample_one().as_char(), 'B');
        assert_eq!(sampler.sample_one().as_char(), 'Z');
    }

    #[test]
    fn test_frequencies_converge_to_weights() {
        let mut sampler = WeightedSampler::new(seeded_rng("0/1/2024"));
        let draws = 200_000;
        let mut counts: HashMap<Letter, u32> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(sampler.sample_one()).or_insert(0) += 1;
        }

        let total = f64::from(catalog::total_weight());
        for letter in catalog::all_letters() {
            let expected = f64::from(letter.weight()) / total;
            let observed = f64::from(*counts.get(&letter).unwrap_or(&0)) / draws as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "{}: observed {:.4}, expected {:.4}",
                letter,
                observed,
                expected
            );
        }
    }

    #[test]
    fn test_same_seed_same_letters() {
        let mut a = WeightedSampler::new(seeded_rng("9/18/2026"));
        let mut b = WeightedSampler::new(seeded_rng("9/18/2026"));
        for _ in 0..50 {
            assert_eq!(a.sample_one(), b.sample_one());
        }
    }

    #[test]
    fn test_daily_seed_uses_zero_based_month() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(daily_seed(date), "9/18/2026");
    }

    #[test]
    fn test_scripted_stream_reads_back_as_floats() {
        let mut random = ScriptedRandom::new(vec![0.0, 0.25, 0.5]);
        assert_eq!(random.next_f64(), 0.0);
        assert_eq!(random.next_f64(), 0.25);
        assert_eq!(random.next_f64(), 0.5);
        // Cycles once exhausted.
        assert_eq!(random.next_f64(), 0.0);
    }
}
