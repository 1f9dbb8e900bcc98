//! Word list loading utilities
//!
//! Provides the `WordSource` trait and sources reading from files, string
//! slices and the embedded list.

use super::WORDS;
use crate::core::Word;
use crate::error::Result;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Something that can supply an ordered word list
pub trait WordSource {
    /// Load every word, in order
    ///
    /// # Errors
    /// Returns [`crate::error::LadderError::Source`] if the underlying storage
    /// cannot be read.
    fn load(&self) -> Result<Vec<Word>>;
}

/// Word source reading a line-delimited file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn load(&self) -> Result<Vec<Word>> {
        load_from_file(&self.path)
    }
}

/// Word source over an in-memory slice
#[derive(Debug, Clone, Copy)]
pub struct SliceSource<'a> {
    words: &'a [&'a str],
}

impl<'a> SliceSource<'a> {
    #[must_use]
    pub const fn new(words: &'a [&'a str]) -> Self {
        Self { words }
    }
}

impl WordSource for SliceSource<'_> {
    fn load(&self) -> Result<Vec<Word>> {
        Ok(words_from_slice(self.words))
    }
}

/// Word source over the list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn load(&self) -> Result<Vec<Word>> {
        Ok(words_from_slice(WORDS))
    }
}

/// Load words from a file
///
/// Each line is trimmed; blank lines and lines that are not a single word are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "", "dog"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
