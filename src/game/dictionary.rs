#![allow(dead_code)]
//! Dictionary module for word validation
//!
//! Ships an embedded default wordlist and can load a larger one from
//! disk. Lookups are O(1) hash set hits on lowercase words.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Embedded wordlist, lowercase, one word per line
static WORDS_DATA: &str = include_str!("../../data/words.txt");

static DEFAULT_WORDS: Lazy<WordList> = Lazy::new(|| WordList::from_text(WORDS_DATA));

/// Membership oracle over lowercase words.
pub trait Dictionary {
    fn is_word(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_word(&self, word: &str) -> bool {
        (**self).is_word(word)
    }
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("word list {path} contains no usable words")]
    Empty { path: PathBuf },
}

/// A hash set of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Parse newline-separated words. Lines are trimmed and lowercased;
    /// anything that is not purely alphabetic is skipped.
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_ascii_lowercase)
            .collect();
        Self { words }
    }

    /// Load a word list file.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_text(&text);
        if list.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(list)
    }

    /// The embedded default list.
    pub fn embedded() -> &'static WordList {
        &DEFAULT_WORDS
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Dictionary for HashSet<&str> {
    fn is_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}
