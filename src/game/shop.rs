//! The letter shop: slot storage and batch generation

use super::catalog::{self, Letter};
use super::sampler::{RandomSource, WeightedSampler};
use super::SHOP_SIZE;
use rand::seq::SliceRandom;
use tracing::warn;

/// Most copies of one letter allowed in a single batch.
pub const MAX_PER_LETTER: usize = 2;

/// Redraws allowed per output position before falling back.
const MAX_DRAWS_PER_SLOT: usize = 1_000;

/// Ordered shop slots. A slot is `None` once its letter has been used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    slots: [Option<Letter>; SHOP_SIZE],
}

impl Default for Shop {
    fn default() -> Self {
        Self {
            slots: [None; SHOP_SIZE],
        }
    }
}

impl Shop {
    /// Build a shop from letters, filling slots in order.
    pub fn from_letters(letters: &[Letter]) -> Self {
        let mut shop = Self::default();
        for (slot, letter) in shop.slots.iter_mut().zip(letters) {
            *slot = Some(*letter);
        }
        shop
    }

    pub fn slots(&self) -> &[Option<Letter>; SHOP_SIZE] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<Letter> {
        self.slots.get(index).copied().flatten()
    }

    /// Number of occupied slots.
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub(crate) fn take(&mut self, index: usize) -> Option<Letter> {
        self.slots[index].take()
    }

    pub(crate) fn put(&mut self, index: usize, letter: Letter) {
        self.slots[index] = Some(letter);
    }

    /// Letters as a display string, `_` for empty slots.
    pub fn as_string(&self) -> String {
        self.slots
            .iter()
            .map(|s| s.map_or('_', Letter::as_char))
            .collect()
    }
}

/// Produces shop batches and shuffles from one random stream.
#[derive(Debug)]
pub struct ShopGenerator<R> {
    sampler: WeightedSampler<R>,
}

impl<R: RandomSource> ShopGenerator<R> {
    pub fn new(random: R) -> Self {
        Self {
            sampler: WeightedSampler::new(random),
        }
    }

    /// Generate `n` letters with at most [`MAX_PER_LETTER`] of each,
    /// in acceptance order.
    pub fn generate(&mut self, n: usize) -> Vec<Letter> {
        let mut counts = [0usize; 26];
        let mut batch = Vec::with_capacity(n);

        while batch.len() < n {
            let letter = self.draw_under_cap(&counts);
            counts[letter.index()] += 1;
            batch.push(letter);
        }

        batch
    }

    /// A full shop of freshly drawn letters.
    pub fn fresh_shop(&mut self) -> Shop {
        Shop::from_letters(&self.generate(SHOP_SIZE))
    }

    /// Permute the letters among occupied slots; empty slots keep their
    /// position.
    pub fn shuffle(&mut self, shop: &mut Shop) {
        let occupied: Vec<usize> = (0..SHOP_SIZE).filter(|&i| shop.slots[i].is_some()).collect();
        let mut letters: Vec<Letter> = occupied.iter().filter_map(|&i| shop.slots[i]).collect();
        letters.shuffle(self.sampler.rng());

        for (slot, letter) in occupied.into_iter().zip(letters) {
            shop.slots[slot] = Some(letter);
        }
    }

    fn draw_under_cap(&mut self, counts: &[usize; 26]) -> Letter {
        for _ in 0..MAX_DRAWS_PER_SLOT {
            let letter = self.sampler.sample_one();
            if counts[letter.index()] < MAX_PER_LETTER {
                return letter;
            }
        }

        warn!(
            draws = MAX_DRAWS_PER_SLOT,
            "letter draw exhausted its retries, taking first letter under the cap"
        );
        catalog::all_letters()
            .find(|l| counts[l.index()] < MAX_PER_LETTER)
            .unwrap_or_else(|| self.sampler.sample_one())
    }
}
