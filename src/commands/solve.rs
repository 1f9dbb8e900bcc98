//! Word ladder solving command
//!
//! Loads a dictionary, solves one start/goal pair and returns the chains.

use crate::core::{Chain, Word};
use crate::error::Result;
use crate::solver::{Resolver, Strategy, StrategyType};
use crate::wordlists::{EmbeddedSource, FileSource, WordSource};
use std::time::{Duration, Instant};

/// Dictionary argument selecting the embedded word list
pub const BUILTIN_DICTIONARY: &str = "builtin";

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub dictionary: String,
    pub from: String,
    pub to: String,
    pub strategy: String,
}

impl SolveConfig {
    #[must_use]
    pub fn new(dictionary: String, from: String, to: String) -> Self {
        Self {
            dictionary,
            from,
            to,
            strategy: "bfs".to_string(),
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub chains: Vec<Chain>,
    pub strategy: &'static str,
    pub duration: Duration,
}

/// Word source picked from the dictionary argument
pub enum DictionarySource {
    Builtin(EmbeddedSource),
    File(FileSource),
}

impl DictionarySource {
    /// `builtin` selects the embedded list, anything else is a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == BUILTIN_DICTIONARY {
            Self::Builtin(EmbeddedSource)
        } else {
            Self::File(FileSource::new(arg))
        }
    }
}

impl WordSource for DictionarySource {
    fn load(&self) -> Result<Vec<Word>> {
        match self {
            Self::Builtin(s) => s.load(),
            Self::File(s) => s.load(),
        }
    }
}

/// Build a resolver for `config` and load its dictionary
///
/// # Errors
///
/// Returns the word source's error if the dictionary cannot be loaded.
pub fn load_resolver(config: &SolveConfig) -> Result<Resolver<StrategyType, DictionarySource>> {
    let strategy = StrategyType::from_name(&config.strategy);
    let source = DictionarySource::from_arg(&config.dictionary);

    let mut resolver = Resolver::new(strategy, source);
    resolver.load_dictionary()?;
    Ok(resolver)
}

/// Solve one pair with an already loaded resolver
///
/// # Errors
///
/// Returns an error if either word is missing from the dictionary or the
/// words have different lengths.
pub fn solve_pair<S: Strategy, W: WordSource>(
    resolver: &Resolver<S, W>,
    from: &str,
    to: &str,
) -> Result<SolveResult> {
    let start = Instant::now();
    let chains = resolver.solve(from, to)?;

    Ok(SolveResult {
        chains,
        strategy: resolver.strategy().name(),
        duration: start.elapsed(),
    })
}
