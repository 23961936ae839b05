#![allow(dead_code)]
//! Letter catalog: base scores and draw weights
//!
//! The declaration order matters: it fixes how a weighted draw maps
//! onto a letter, so the same random stream always yields the same shop.

use std::fmt;

/// (letter, base score, draw weight), in sampling order.
const LETTER_TABLE: [(char, u32, u32); 26] = [
    ('A', 1, 9),
    ('B', 3, 2),
    ('C', 3, 2),
    ('D', 2, 4),
    ('E', 1, 12),
    ('F', 4, 2),
    ('G', 2, 3),
    ('H', 4, 2),
    ('I', 1, 9),
    ('J', 8, 1),
    ('K', 5, 1),
    ('L', 1, 4),
    ('M', 3, 2),
    ('N', 1, 6),
    ('O', 1, 8),
    ('P', 3, 2),
    ('Q', 10, 1),
    ('R', 1, 6),
    ('S', 1, 4),
    ('T', 1, 6),
    ('U', 1, 4),
    ('V', 4, 2),
    ('W', 4, 2),
    ('X', 8, 1),
    ('Y', 4, 2),
    ('Z', 10, 1),
];

/// One of the 26 uppercase tile letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Parse a letter, accepting either case. Returns None for anything
    /// outside A-Z.
    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Letter(upper as u8 - b'A'))
        } else {
            None
        }
    }

    /// Position of this letter in the catalog.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    pub fn base_score(self) -> u32 {
        LETTER_TABLE[self.index()].1
    }

    pub fn weight(self) -> u32 {
        LETTER_TABLE[self.index()].2
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// All letters in catalog order.
pub fn all_letters() -> impl Iterator<Item = Letter> {
    (0..LETTER_TABLE.len() as u8).map(Letter)
}

/// Sum of all draw weights.
pub fn total_weight() -> u32 {
    LETTER_TABLE.iter().map(|(_, _, w)| w).sum()
}
