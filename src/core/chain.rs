//! Word chains and best-solution selection

use super::{Word, is_adjacent};

/// An ordered sequence of words from the start word to the goal word
pub type Chain = Vec<Word>;

/// Reverse a sequence
///
/// Solutions are collected by walking from a goal node back to the root, so
/// they come out goal-first and are flipped before being returned.
#[must_use]
pub fn flip_sequence<T>(mut items: Vec<T>) -> Vec<T> {
    items.reverse();
    items
}

/// Keep only the chains of minimum length
///
/// Ties are all kept in discovery order. An empty input yields an empty output.
///
/// # Examples
/// ```
/// use word_ladder::core::best_solutions;
///
/// let chains = vec![vec![1, 2, 3], vec![1, 2], vec![4, 5], vec![1, 2, 3, 4]];
/// assert_eq!(best_solutions(chains), vec![vec![1, 2], vec![4, 5]]);
/// ```
#[must_use]
pub fn best_solutions<T>(chains: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let Some(shortest) = chains.iter().map(Vec::len).min() else {
        return chains;
    };

    chains
        .into_iter()
        .filter(|chain| chain.len() == shortest)
        .collect()
}

/// Check that a chain is non-empty and every consecutive pair is adjacent
#[must_use]
pub fn is_valid_chain(chain: &[Word]) -> bool {
    !chain.is_empty() && chain.windows(2).all(|pair| is_adjacent(&pair[0], &pair[1]))
}
