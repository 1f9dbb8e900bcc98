//! A* search
//!
//! Best-first search ordered by f = g + h, where g is the node depth and h the
//! number of positions still differing from the goal. Each step changes one
//! character, so h never overestimates.
//!
//! Every neighbour becomes a fresh node: a word reached again through another
//! path is queued again rather than re-scored. Words already on a node's own
//! path are skipped, so no chain repeats a word. A goal outside the start
//! word's component is rejected before any node is created. Ties on f go to
//! the node created first.

use super::node::{NodeArena, NodeId};
use super::strategy::{Strategy, check_lengths};
use crate::core::{Chain, Word, is_reachable, neighbours, similarity, useful_words};
use crate::error::Result;
use log::{debug, trace};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Heuristic search returning at most one shortest chain
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarSearch;

impl Strategy for AStarSearch {
    fn find_chains(&self, from: &Word, to: &Word, dictionary: &[Word]) -> Result<Vec<Chain>> {
        check_lengths(from, to)?;

        let useful = useful_words(dictionary, from);
        if !is_reachable(&useful, from, to) {
            debug!("astar: {to} is not reachable from {from}");
            return Ok(Vec::new());
        }

        let mut run = AStarRun::new(to, &useful);
        let found = run.search(from);

        debug!(
            "astar: {} nodes created, {} expanded, goal found: {}",
            run.arena.len(),
            run.expanded,
            found.is_some()
        );

        Ok(found
            .map(|node| vec![run.arena.solution(node)])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "astar"
    }
}

/// Remaining number of mismatched positions between `word` and the goal
fn distance_to_goal(word: &Word, to: &Word) -> usize {
    to.len() - similarity(word, to).unwrap_or(0)
}

/// Working state of one A* run
struct AStarRun<'a, 'w> {
    to: &'a Word,
    useful: &'a [&'w Word],
    arena: NodeArena<'w>,
    open_set: BinaryHeap<Reverse<(usize, NodeId)>>,
    g_score: FxHashMap<NodeId, usize>,
    f_score: FxHashMap<NodeId, usize>,
    expanded: usize,
}

impl<'a, 'w> AStarRun<'a, 'w> {
    fn new(to: &'a Word, useful: &'a [&'w Word]) -> Self {
        Self {
            to,
            useful,
            arena: NodeArena::new(),
            open_set: BinaryHeap::new(),
            g_score: FxHashMap::default(),
            f_score: FxHashMap::default(),
            expanded: 0,
        }
    }

    /// Run the main loop, returning the first goal node taken from the open set
    fn search(&mut self, from: &'w Word) -> Option<NodeId> {
        let root = self.arena.root(from, distance_to_goal(from, self.to));
        self.open(root);

        while let Some(Reverse((f, current))) = self.open_set.pop() {
            let word = self.arena.word(current);
            if word == self.to {
                return Some(current);
            }

            trace!("astar: expanding {word} (f = {f})");
            self.expanded += 1;

            for next in neighbours(self.useful, word) {
                if self.arena.in_ancestry(current, next) {
                    continue;
                }
                let child = self.arena.child(current, next, distance_to_goal(next, self.to));
                self.open(child);
            }
        }

        None
    }

    /// Score a node and add it to the open set
    fn open(&mut self, node: NodeId) {
        let g = self.arena.depth(node);
        let f = g + self.arena.score(node);

        self.g_score.insert(node, g);
        self.f_score.insert(node, f);
        self.open_set.push(Reverse((f, node)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_valid_chain;
    use crate::error::LadderError;
    use crate::wordlists::loader::words_from_slice;

    fn solve(from: &str, to: &str, words: &[&str]) -> Result<Vec<Chain>> {
        let dictionary = words_from_slice(words);
        let from = Word::new(from).unwrap();
        let to = Word::new(to).unwrap();
        AStarSearch.find_chains(&from, &to, &dictionary)
    }

    #[test]
    fn returns_one_shortest_chain() {
        let chains = solve("cat", "dog", &["cat", "cot", "cog", "dog", "dot"]).unwrap();
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].len(), 4);
        assert!(is_valid_chain(&chains[0]));
        assert_eq!(chains[0][0], "cat");
        assert_eq!(chains[0][3], "dog");
    }

    #[test]
    fn ties_go_to_the_earliest_node() {
        // cog is created before dot, so its branch reaches the goal first
        let chains = solve("cat", "dog", &["cat", "cot", "cog", "dog", "dot"]).unwrap();
        assert_eq!(chains, vec![vec!["cat", "cot", "cog", "dog"]]);
    }

    #[test]
    fn finds_route_that_moves_away_from_goal() {
        let chains = solve("abc", "ayz", &["abc", "qbc", "qyc", "qyz", "ayz"]).unwrap();
        assert_eq!(chains, vec![vec!["abc", "qbc", "qyc", "qyz", "ayz"]]);
    }

    #[test]
    fn unreachable_goal_terminates_in_cyclic_graph() {
        // cot, cog, cut and cug form a cycle that never reaches dig
        let chains = solve("cat", "dig", &["cat", "cot", "cog", "cut", "cug", "dig"]).unwrap();
        assert!(chains.is_empty());
    }

    #[test]
    fn self_path_is_single_word() {
        let chains = solve("dog", "dog", &["cat", "cot", "cog", "dog", "dot"]).unwrap();
        assert_eq!(chains, vec![vec!["dog"]]);
    }

    #[test]
    fn no_path_is_empty_not_error() {
        let chains = solve("cat", "dog", &["cat", "cot", "dog"]).unwrap();
        assert!(chains.is_empty());
    }

    #[test]
    fn length_mismatch() {
        let result = solve("dummy", "to", &[]);
        assert!(matches!(result, Err(LadderError::LengthMismatch { .. })));
    }

    #[test]
    fn distance_counts_mismatches() {
        let to = Word::new("dog").unwrap();
        assert_eq!(distance_to_goal(&Word::new("cat").unwrap(), &to), 3);
        assert_eq!(distance_to_goal(&Word::new("cot").unwrap(), &to), 2);
        assert_eq!(distance_to_goal(&to, &to), 0);
    }

    #[test]
    fn lowest_f_score_is_expanded_first() {
        let (fake, mock) = (Word::new("fake").unwrap(), Word::new("mock").unwrap());
        let useful: Vec<&Word> = Vec::new();
        let mut run = AStarRun::new(&mock, &useful);

        let far = run.arena.root(&fake, 10);
        let near = run.arena.root(&mock, 3);
        run.open(far);
        run.open(near);

        assert_eq!(run.f_score[&far], 11);
        assert_eq!(run.f_score[&near], 4);
        assert_eq!(run.g_score[&near], 1);
        assert_eq!(run.open_set.pop(), Some(Reverse((4, near))));
    }
}
