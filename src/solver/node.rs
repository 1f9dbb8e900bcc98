//! Search tree storage
//!
//! Nodes live in a growable arena and point at their predecessor by index, so
//! an ancestry chain is walked in O(depth) without shared ownership.

use crate::core::{Chain, Word, flip_sequence};

/// Index of a node inside a [`NodeArena`]
///
/// Ids are handed out in creation order, so comparing two ids compares their
/// discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One word placed at one position of a candidate chain
#[derive(Debug, Clone, Copy)]
struct SearchNode<'w> {
    word: &'w Word,
    parent: Option<NodeId>,
    depth: usize,
    score: usize,
}

/// Arena of search nodes for a single search run
#[derive(Debug, Default)]
pub struct NodeArena<'w> {
    nodes: Vec<SearchNode<'w>>,
}

impl<'w> NodeArena<'w> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a root node (depth 1, no predecessor)
    pub fn root(&mut self, word: &'w Word, score: usize) -> NodeId {
        self.push(SearchNode {
            word,
            parent: None,
            depth: 1,
            score,
        })
    }

    /// Add a node whose predecessor is `parent`
    pub fn child(&mut self, parent: NodeId, word: &'w Word, score: usize) -> NodeId {
        let depth = self.depth(parent) + 1;
        self.push(SearchNode {
            word,
            parent: Some(parent),
            depth,
            score,
        })
    }

    fn push(&mut self, node: SearchNode<'w>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    #[must_use]
    pub fn word(&self, id: NodeId) -> &'w Word {
        self.nodes[id.0].word
    }

    /// Number of nodes from the root to `id`, inclusive
    #[inline]
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.nodes[id.0].depth
    }

    /// Strategy-specific score recorded when the node was created
    #[inline]
    #[must_use]
    pub fn score(&self, id: NodeId) -> usize {
        self.nodes[id.0].score
    }

    #[inline]
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over the words from `id` up to the root
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &'w Word> + '_ {
        std::iter::successors(Some(id), |&current| self.parent(current))
            .map(|current| self.word(current))
    }

    /// Check whether `word` already appears on the path from the root to `id`
    #[must_use]
    pub fn in_ancestry(&self, id: NodeId, word: &Word) -> bool {
        self.ancestry(id).any(|ancestor| ancestor == word)
    }

    /// The chain of words from the root to `id`
    #[must_use]
    pub fn solution(&self, id: NodeId) -> Chain {
        flip_sequence(self.ancestry(id).cloned().collect())
    }
}
