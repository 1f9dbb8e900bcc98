//! Search strategies
//!
//! Defines the Strategy trait and the enum used to pick one at runtime.

use super::{AStarSearch, BreadthFirstSearch, GreedySearch};
use crate::core::{Chain, Word};
use crate::error::{LadderError, Result};

/// A strategy for finding word chains between two words
///
/// Implementations are stateless: all working state lives inside a single
/// call, so one strategy value can serve any number of solves.
pub trait Strategy {
    /// Find chains from `from` to `to` using the words of `dictionary`
    ///
    /// Returns an empty list when no chain is found.
    ///
    /// # Errors
    /// Returns [`LadderError::LengthMismatch`] if the words have different lengths.
    fn find_chains(&self, from: &Word, to: &Word, dictionary: &[Word]) -> Result<Vec<Chain>>;

    /// Short name used in logs and reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StrategyType {
    /// Breadth-first search (default, all shortest chains)
    BreadthFirst(BreadthFirstSearch),
    /// Greedy depth-bounded search (fast, incomplete)
    Greedy(GreedySearch),
    /// A* search (one shortest chain)
    AStar(AStarSearch),
}

impl Strategy for StrategyType {
    fn find_chains(&self, from: &Word, to: &Word, dictionary: &[Word]) -> Result<Vec<Chain>> {
        match self {
            Self::BreadthFirst(s) => s.find_chains(from, to, dictionary),
            Self::Greedy(s) => s.find_chains(from, to, dictionary),
            Self::AStar(s) => s.find_chains(from, to, dictionary),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst(s) => s.name(),
            Self::Greedy(s) => s.name(),
            Self::AStar(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "bfs", "greedy", "astar", "a-star", "a*".
    /// Defaults to breadth-first search if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "greedy" => Self::Greedy(GreedySearch::default()),
            "astar" | "a-star" | "a*" => Self::AStar(AStarSearch),
            _ => Self::BreadthFirst(BreadthFirstSearch),
        }
    }

    /// One instance of every strategy, in a fixed order
    #[must_use]
    pub fn all() -> [Self; 3] {
        [
            Self::BreadthFirst(BreadthFirstSearch),
            Self::Greedy(GreedySearch::default()),
            Self::AStar(AStarSearch),
        ]
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::BreadthFirst(BreadthFirstSearch)
    }
}

/// Reject start and goal words of different lengths
pub(crate) fn check_lengths(from: &Word, to: &Word) -> Result<()> {
    if from.len() == to.len() {
        return Ok(());
    }

    Err(LadderError::LengthMismatch {
        from: from.text().to_string(),
        to: to.text().to_string(),
        from_len: from.len(),
        to_len: to.len(),
    })
}
