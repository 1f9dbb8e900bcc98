//! Greedy depth-bounded search
//!
//! Walks the word tree depth-first, only stepping to words that share one more
//! position with the goal than the current word does. When no such step exists
//! a single lateral step (same similarity) is tried, but only while the path is
//! shorter than the depth cap. Steps that move away from the goal are never
//! taken, so this search can miss chains that exist.

use super::node::{NodeArena, NodeId};
use super::strategy::{Strategy, check_lengths};
use crate::core::{
    Chain, Word, best_solutions, is_reachable, neighbours, similarity, useful_words,
};
use crate::error::Result;
use log::{debug, trace};

/// Default multiplier applied to the word length to get the depth cap
pub const DEFAULT_DEPTH_FACTOR: usize = 3;

/// Fast, incomplete search
#[derive(Debug, Clone, Copy)]
pub struct GreedySearch {
    depth_factor: usize,
}

impl GreedySearch {
    /// Create a greedy search whose depth cap is `depth_factor` times the word length
    #[must_use]
    pub const fn with_depth_factor(depth_factor: usize) -> Self {
        Self { depth_factor }
    }

    #[must_use]
    pub const fn depth_factor(&self) -> usize {
        self.depth_factor
    }
}

impl Default for GreedySearch {
    fn default() -> Self {
        Self::with_depth_factor(DEFAULT_DEPTH_FACTOR)
    }
}

impl Strategy for GreedySearch {
    fn find_chains(&self, from: &Word, to: &Word, dictionary: &[Word]) -> Result<Vec<Chain>> {
        check_lengths(from, to)?;

        let useful = useful_words(dictionary, from);
        if !is_reachable(&useful, from, to) {
            debug!("greedy: {to} is not reachable from {from}");
            return Ok(Vec::new());
        }

        let mut run = GreedyRun::new(to, &useful, from.len() * self.depth_factor);

        let root = run.arena.root(from, score_to_goal(from, to));
        let mut path = vec![from];
        run.generate_tree(root, &mut path);

        debug!(
            "greedy: {} nodes created, {} goal nodes, max depth {}",
            run.arena.len(),
            run.matching.len(),
            run.max_depth
        );

        let chains = run
            .matching
            .iter()
            .map(|&node| run.arena.solution(node))
            .collect();

        Ok(best_solutions(chains))
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

/// Number of positions `word` already shares with the goal
fn score_to_goal(word: &Word, to: &Word) -> usize {
    similarity(word, to).unwrap_or(0)
}

/// Working state of one greedy run
struct GreedyRun<'a, 'w> {
    to: &'a Word,
    useful: &'a [&'w Word],
    max_depth: usize,
    arena: NodeArena<'w>,
    matching: Vec<NodeId>,
    found_at_depth: Option<usize>,
}

impl<'a, 'w> GreedyRun<'a, 'w> {
    fn new(to: &'a Word, useful: &'a [&'w Word], max_depth: usize) -> Self {
        Self {
            to,
            useful,
            max_depth,
            arena: NodeArena::new(),
            matching: Vec::new(),
            found_at_depth: None,
        }
    }

    /// Expand `node`, where `path` holds every word from the root to `node`
    fn generate_tree(&mut self, node: NodeId, path: &mut Vec<&'w Word>) {
        let depth = self.arena.depth(node);

        if self.arena.word(node) == self.to {
            self.found_at_depth = Some(depth);
            self.matching.push(node);
            return;
        }

        if self.found_at_depth.is_some_and(|found| depth > found) {
            return;
        }

        let candidates: Vec<&'w Word> = neighbours(self.useful, self.arena.word(node))
            .into_iter()
            .filter(|candidate| !path.contains(candidate))
            .collect();

        let score = self.arena.score(node);
        let created = self.create_population(node, &candidates, path, score + 1);

        if created == 0 && depth < self.max_depth {
            trace!(
                "greedy: no closer word after {}, trying lateral moves",
                self.arena.word(node)
            );
            self.create_population(node, &candidates, path, score);
        }
    }

    /// Create and expand a child for every candidate scoring `target`
    ///
    /// Returns the number of children created.
    fn create_population(
        &mut self,
        node: NodeId,
        candidates: &[&'w Word],
        path: &mut Vec<&'w Word>,
        target: usize,
    ) -> usize {
        let mut created = 0;

        for &candidate in candidates {
            let score = score_to_goal(candidate, self.to);
            if score != target {
                continue;
            }

            created += 1;
            let child = self.arena.child(node, candidate, score);

            path.push(candidate);
            self.generate_tree(child, path);
            path.pop();
        }

        created
    }
}
