//! Main word ladder resolver interface

use super::strategy::Strategy;
use crate::core::{Chain, Dictionary, Word};
use crate::error::{LadderError, Result};
use crate::wordlists::WordSource;
use log::info;

/// Main word ladder resolver
///
/// Loads the dictionary once from a word source and answers any number of
/// solve calls with the given strategy.
pub struct Resolver<S: Strategy, W: WordSource> {
    strategy: S,
    source: W,
    dictionary: Dictionary,
}

impl<S: Strategy, W: WordSource> Resolver<S, W> {
    /// Create a new resolver with the given strategy and word source
    ///
    /// The dictionary starts empty until [`Resolver::load_dictionary`] is called.
    #[must_use]
    pub fn new(strategy: S, source: W) -> Self {
        Self {
            strategy,
            source,
            dictionary: Dictionary::default(),
        }
    }

    /// Populate the dictionary from the word source
    ///
    /// # Errors
    /// Returns the word source's error unchanged.
    pub fn load_dictionary(&mut self) -> Result<()> {
        let words = self.source.load()?;
        info!("loaded {} words", words.len());
        self.dictionary = Dictionary::new(words);
        Ok(())
    }

    /// Find chains from `from` to `to`
    ///
    /// Both words must be present in the loaded dictionary; `from` is checked first.
    ///
    /// # Errors
    /// - [`LadderError::WordNotFound`] if either word is absent
    /// - [`LadderError::LengthMismatch`] if the words have different lengths
    pub fn solve(&self, from: &str, to: &str) -> Result<Vec<Chain>> {
        let (from_word, to_word) = self.endpoints(from, to)?;

        info!(
            "solving {from} -> {to} with {} over {} words",
            self.strategy.name(),
            self.dictionary.len()
        );

        self.strategy
            .find_chains(from_word, to_word, self.dictionary.words())
    }

    /// Look up both endpoints in the loaded dictionary, `from` first
    ///
    /// # Errors
    /// Returns [`LadderError::WordNotFound`] naming the first missing word.
    pub fn endpoints(&self, from: &str, to: &str) -> Result<(&Word, &Word)> {
        let from_word = self
            .dictionary
            .get(from)
            .ok_or_else(|| LadderError::WordNotFound(from.to_string()))?;
        let to_word = self
            .dictionary
            .get(to)
            .ok_or_else(|| LadderError::WordNotFound(to.to_string()))?;

        Ok((from_word, to_word))
    }

    /// Check whether a word is in the loaded dictionary
    #[must_use]
    pub fn is_word_present(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// The loaded dictionary
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}
