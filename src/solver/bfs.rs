//! Breadth-first search
//!
//! Explores the word graph level by level and returns every shortest chain it
//! meets. Cycle avoidance is per chain: the same word may sit in many queued
//! nodes as long as each one has a different ancestry, which is what lets the
//! search report several equally short chains passing through one word.
//! A goal outside the start word's component returns no chains without
//! searching.

use super::node::{NodeArena, NodeId};
use super::strategy::{Strategy, check_lengths};
use crate::core::{Chain, Word, best_solutions, is_reachable, neighbours, useful_words};
use crate::error::Result;
use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Complete search returning all shortest chains
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch;

impl Strategy for BreadthFirstSearch {
    fn find_chains(&self, from: &Word, to: &Word, dictionary: &[Word]) -> Result<Vec<Chain>> {
        check_lengths(from, to)?;

        let useful = useful_words(dictionary, from);
        if !is_reachable(&useful, from, to) {
            debug!("bfs: {to} is not reachable from {from}");
            return Ok(Vec::new());
        }

        let mut run = BfsRun::new(to, &useful);
        let root = run.arena.root(from, 0);
        run.search(root);

        debug!(
            "bfs: {} nodes created, {} goal nodes, best depth {:?}",
            run.arena.len(),
            run.solutions.len(),
            run.best_depth
        );

        let chains = run
            .solutions
            .iter()
            .map(|&node| run.arena.solution(node))
            .collect();

        Ok(best_solutions(chains))
    }

    fn name(&self) -> &'static str {
        "bfs"
    }
}

/// Working state of one breadth-first run
struct BfsRun<'a, 'w> {
    to: &'a Word,
    useful: &'a [&'w Word],
    arena: NodeArena<'w>,
    queue: VecDeque<NodeId>,
    discovered: FxHashSet<NodeId>,
    solutions: Vec<NodeId>,
    best_depth: Option<usize>,
}

impl<'a, 'w> BfsRun<'a, 'w> {
    fn new(to: &'a Word, useful: &'a [&'w Word]) -> Self {
        Self {
            to,
            useful,
            arena: NodeArena::new(),
            queue: VecDeque::new(),
            discovered: FxHashSet::default(),
            solutions: Vec::new(),
            best_depth: None,
        }
    }

    fn search(&mut self, root: NodeId) {
        self.discovered.insert(root);
        self.queue.push_back(root);

        while let Some(node) = self.queue.pop_front() {
            let depth = self.arena.depth(node);

            // Breadth order: everything still queued is at least this deep
            if self.best_depth.is_some_and(|best| depth > best) {
                break;
            }

            if self.arena.word(node) == self.to {
                self.best_depth = Some(depth);
                self.solutions.push(node);
            }

            // Children of a node at the best depth can only be longer chains
            if self.best_depth.is_some_and(|best| depth >= best) {
                continue;
            }

            self.expand(node);
        }
    }

    fn expand(&mut self, node: NodeId) {
        let word = self.arena.word(node);
        let candidates: Vec<&'w Word> = neighbours(self.useful, word)
            .into_iter()
            .filter(|candidate| !self.arena.in_ancestry(node, candidate))
            .collect();

        trace!("bfs: expanding {word} with {} candidates", candidates.len());

        for candidate in candidates {
            let child = self.arena.child(node, candidate, 0);
            if self.discovered.insert(child) {
                self.queue.push_back(child);
            }
        }
    }
}
