//! Strategy comparison command
//!
//! Runs every search strategy on the same start/goal pair, one after another,
//! and records what each one found and how long it took.

use crate::core::Chain;
use crate::error::Result;
use crate::solver::{Resolver, Strategy, StrategyType};
use crate::wordlists::WordSource;
use std::time::{Duration, Instant};

/// Outcome of one strategy in a comparison
#[derive(Debug)]
pub struct StrategyRun {
    pub strategy: &'static str,
    pub chains: Vec<Chain>,
    pub duration: Duration,
}

impl StrategyRun {
    /// Length of the chains found, if any
    #[must_use]
    pub fn chain_length(&self) -> Option<usize> {
        self.chains.first().map(Vec::len)
    }
}

/// Result of comparing every strategy
#[derive(Debug)]
pub struct CompareResult {
    pub from: String,
    pub to: String,
    pub runs: Vec<StrategyRun>,
}

impl CompareResult {
    /// Shortest chain length found by any strategy
    #[must_use]
    pub fn best_length(&self) -> Option<usize> {
        self.runs.iter().filter_map(StrategyRun::chain_length).min()
    }
}

/// Run every strategy against the dictionary already loaded in `resolver`
///
/// # Errors
///
/// Returns [`crate::LadderError::WordNotFound`] if either word is missing, or the
/// first strategy error such as a length mismatch.
pub fn compare_strategies<S: Strategy, W: WordSource>(
    resolver: &Resolver<S, W>,
    from: &str,
    to: &str,
) -> Result<CompareResult> {
    let (from_word, to_word) = resolver.endpoints(from, to)?;
    let dictionary = resolver.dictionary();

    let mut runs = Vec::new();
    for strategy in StrategyType::all() {
        let start = Instant::now();
        let chains = strategy.find_chains(from_word, to_word, dictionary.words())?;

        runs.push(StrategyRun {
            strategy: strategy.name(),
            chains,
            duration: start.elapsed(),
        });
    }

    Ok(CompareResult {
        from: from.to_string(),
        to: to.to_string(),
        runs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LadderError;
    use crate::solver::BreadthFirstSearch;
    use crate::wordlists::SliceSource;

    fn loaded(words: &'static [&'static str]) -> Resolver<BreadthFirstSearch, SliceSource<'static>> {
        let mut resolver = Resolver::new(BreadthFirstSearch, SliceSource::new(words));
        resolver.load_dictionary().unwrap();
        resolver
    }

    #[test]
    fn runs_every_strategy_in_order() {
        let resolver = loaded(&["cat", "cot", "cog", "dog", "dot"]);
        let result = compare_strategies(&resolver, "cat", "dog").unwrap();

        let names: Vec<&str> = result.runs.iter().map(|run| run.strategy).collect();
        assert_eq!(names, ["bfs", "greedy", "astar"]);
        assert_eq!(result.runs[0].chains.len(), 2);
        assert_eq!(result.runs[1].chains.len(), 2);
        assert_eq!(result.runs[2].chains.len(), 1);
        assert_eq!(result.best_length(), Some(4));
    }

    #[test]
    fn greedy_may_come_back_empty() {
        let resolver = loaded(&["abc", "qbc", "qyc", "qyz", "ayz"]);
        let result = compare_strategies(&resolver, "abc", "ayz").unwrap();

        assert_eq!(result.runs[0].chain_length(), Some(5));
        assert_eq!(result.runs[1].chain_length(), None);
        assert_eq!(result.runs[2].chain_length(), Some(5));
        assert_eq!(result.best_length(), Some(5));
    }

    #[test]
    fn unknown_word_is_an_error() {
        let resolver = loaded(&["cat", "dog"]);
        assert!(matches!(
            compare_strategies(&resolver, "cat", "zzz"),
            Err(LadderError::WordNotFound(_))
        ));
    }

    #[test]
    fn missing_words_reported_like_solve() {
        let resolver = loaded(&["cat", "dog"]);

        let compared = compare_strategies(&resolver, "zzz", "yyy").unwrap_err();
        let solved = resolver.solve("zzz", "yyy").unwrap_err();
        assert_eq!(compared.to_string(), solved.to_string());
        assert!(matches!(compared, LadderError::WordNotFound(word) if word == "zzz"));
    }
}
