//! Word sources for the resolver
//!
//! A word source yields the raw, ordered word list. Files and the list
//! embedded at build time are supported out of the box.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{EmbeddedSource, FileSource, SliceSource, WordSource};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
        assert_eq!(WORDS_COUNT, 764);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not a valid word");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_contains_classic_ladder() {
        for word in ["cat", "cot", "cog", "dog"] {
            assert!(WORDS.contains(&word), "Word '{word}' missing");
        }
    }
}
