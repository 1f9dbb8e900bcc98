//! Loaded word list with constant-time membership checks

use super::Word;
use rustc_hash::FxHashSet;

/// An ordered word list as loaded from a word source
///
/// Duplicates are kept in `words()`; the membership index only records which
/// texts are present.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let index = words.iter().map(|w| w.text().to_string()).collect();
        Self { words, index }
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check whether a word is present
    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(text)
    }

    /// Find the first occurrence of a word
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        if !self.contains(text) {
            return None;
        }
        self.words.iter().find(|w| w.text() == text)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
