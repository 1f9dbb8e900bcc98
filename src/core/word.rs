//! Word ladder word representation
//!
//! A Word stores its text along with the decoded characters, so positional
//! comparisons never have to re-scan UTF-8.

use std::fmt;
use thiserror::Error;

/// A dictionary word with cached character positions
///
/// Equality is exact character-sequence equality. No case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Box<[char]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must not contain whitespace, got {0:?}")]
    ContainsWhitespace(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - The text contains whitespace
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    /// assert_eq!(word.len(), 3);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace(text));
        }

        let chars = text.chars().collect();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.chars(), &['c', 'a', 't']);
    }

    #[test]
    fn word_case_is_preserved() {
        let word = Word::new("Cat").unwrap();
        assert_eq!(word.text(), "Cat");
        assert_ne!(word, Word::new("cat").unwrap());
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_whitespace() {
        assert!(matches!(
            Word::new("ice cream"),
            Err(WordError::ContainsWhitespace(_))
        ));
        assert!(Word::new("tab\there").is_err());
    }

    #[test]
    fn word_len_counts_characters() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(word.text().len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_display() {
        let word = Word::new("dog").unwrap();
        assert_eq!(format!("{word}"), "dog");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("cog").unwrap();
        let word2 = Word::new("cog").unwrap();
        let word3 = Word::new("cot").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
        assert_eq!(word1, "cog");
    }
}
