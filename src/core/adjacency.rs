//! Word adjacency and dictionary filtering
//!
//! The word graph is never materialized: every strategy asks these helpers for
//! the neighbours of a word on demand.

use super::Word;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Count the positions where two words carry the same character
///
/// Returns `None` when the words have different lengths, since positional
/// similarity is meaningless between them.
///
/// # Examples
/// ```
/// use word_ladder::core::{Word, similarity};
///
/// let cat = Word::new("cat").unwrap();
/// let cot = Word::new("cot").unwrap();
/// let dogs = Word::new("dogs").unwrap();
///
/// assert_eq!(similarity(&cat, &cot), Some(2));
/// assert_eq!(similarity(&cat, &dogs), None);
/// ```
#[must_use]
pub fn similarity(a: &Word, b: &Word) -> Option<usize> {
    if a.len() != b.len() {
        return None;
    }

    let matching = a
        .chars()
        .iter()
        .zip(b.chars())
        .filter(|(x, y)| x == y)
        .count();

    Some(matching)
}

/// Check whether two words differ in exactly one position
///
/// Words of different lengths are never adjacent, and a word is not adjacent
/// to itself.
#[must_use]
pub fn is_adjacent(a: &Word, b: &Word) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    similarity(a, b) == Some(a.len() - 1)
}

/// Narrow a dictionary to the words a chain starting at `from` can use
///
/// Keeps every word with the same length as `from`, except `from` itself.
/// Dictionary order is preserved.
#[must_use]
pub fn useful_words<'w>(all: &'w [Word], from: &Word) -> Vec<&'w Word> {
    all.iter()
        .filter(|word| word.len() == from.len() && *word != from)
        .collect()
}

/// List the useful words adjacent to `word`, in dictionary order
#[must_use]
pub fn neighbours<'w>(useful: &[&'w Word], word: &Word) -> Vec<&'w Word> {
    useful
        .iter()
        .copied()
        .filter(|candidate| is_adjacent(candidate, word))
        .collect()
}

/// Check whether `to` can be reached from `from` through `useful` words
///
/// Floods the word graph breadth-first, visiting each word once. A word always
/// reaches itself.
#[must_use]
pub fn is_reachable(useful: &[&Word], from: &Word, to: &Word) -> bool {
    if from == to {
        return true;
    }

    let mut visited: FxHashSet<&str> = FxHashSet::default();
    let mut queue = VecDeque::from([from]);
    visited.insert(from.text());

    while let Some(word) = queue.pop_front() {
        for next in neighbours(useful, word) {
            if next == to {
                return true;
            }
            if visited.insert(next.text()) {
                queue.push_back(next);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn similarity_counts_matching_positions() {
        assert_eq!(similarity(&word("cat"), &word("cat")), Some(3));
        assert_eq!(similarity(&word("cat"), &word("dog")), Some(0));
        assert_eq!(similarity(&word("cog"), &word("dog")), Some(2));
    }

    #[test]
    fn similarity_is_positional() {
        // Same letters, different positions
        assert_eq!(similarity(&word("act"), &word("cat")), Some(1));
    }

    #[test]
    fn similarity_different_lengths_is_incomparable() {
        assert_eq!(similarity(&word("cat"), &word("cats")), None);
    }

    #[test]
    fn adjacent_when_exactly_one_position_differs() {
        assert!(is_adjacent(&word("cat"), &word("cot")));
        assert!(is_adjacent(&word("cot"), &word("cat")));
        assert!(is_adjacent(&word("dot"), &word("dog")));
    }

    #[test]
    fn not_adjacent_to_itself() {
        assert!(!is_adjacent(&word("cat"), &word("cat")));
    }

    #[test]
    fn not_adjacent_when_two_positions_differ() {
        assert!(!is_adjacent(&word("cat"), &word("cog")));
    }

    #[test]
    fn not_adjacent_when_lengths_differ() {
        assert!(!is_adjacent(&word("cat"), &word("cats")));
        assert!(!is_adjacent(&word("at"), &word("cat")));
    }

    #[test]
    fn single_character_words() {
        assert!(is_adjacent(&word("a"), &word("b")));
        assert!(!is_adjacent(&word("a"), &word("a")));
    }

    #[test]
    fn useful_words_filters_length_and_start() {
        let all = words_from_slice(&["cat", "cog", "cot", "dog", "dot", "code"]);
        let useful = useful_words(&all, &word("cat"));

        let texts: Vec<&str> = useful.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["cog", "cot", "dog", "dot"]);
    }

    #[test]
    fn useful_words_keeps_duplicates() {
        let all = words_from_slice(&["cot", "cat", "cot"]);
        let useful = useful_words(&all, &word("cat"));
        assert_eq!(useful.len(), 2);
    }

    #[test]
    fn neighbours_in_dictionary_order() {
        let all = words_from_slice(&["cat", "cog", "cot", "dog", "dot"]);
        let useful = useful_words(&all, &word("cat"));

        let cases = [
            ("cat", vec!["cot"]),
            ("cot", vec!["cog", "dot"]),
            ("cog", vec!["cot", "dog"]),
            ("dot", vec!["cot", "dog"]),
        ];

        for (input, expected) in cases {
            let found: Vec<&str> = neighbours(&useful, &word(input))
                .iter()
                .map(|w| w.text())
                .collect();
            assert_eq!(found, expected, "neighbours of {input}");
        }
    }

    #[test]
    fn reachable_through_intermediate_words() {
        let all = words_from_slice(&["cat", "cot", "cog", "dog", "dot"]);
        let useful = useful_words(&all, &word("cat"));

        assert!(is_reachable(&useful, &word("cat"), &word("dog")));
        assert!(is_reachable(&useful, &word("cat"), &word("cot")));
    }

    #[test]
    fn unreachable_across_components() {
        // cot, cog, cut and cug form a cycle with no way out to dig
        let all = words_from_slice(&["cat", "cot", "cog", "cut", "cug", "dig"]);
        let useful = useful_words(&all, &word("cat"));

        assert!(!is_reachable(&useful, &word("cat"), &word("dig")));
    }

    #[test]
    fn unreachable_when_goal_is_not_useful() {
        let all = words_from_slice(&["cat", "cot"]);
        let useful = useful_words(&all, &word("cat"));

        assert!(!is_reachable(&useful, &word("cat"), &word("cog")));
    }

    #[test]
    fn word_reaches_itself() {
        let useful: Vec<&Word> = Vec::new();
        assert!(is_reachable(&useful, &word("dog"), &word("dog")));
    }
}
