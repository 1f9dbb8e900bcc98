//! Word Ladder Solver
//!
//! Finds chains of dictionary words from a start word to a goal word, changing
//! one character per step. Three strategies are available: breadth-first
//! (all shortest chains), greedy (fast, may miss) and A* (one shortest chain).
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::solver::{BreadthFirstSearch, Resolver};
//! use word_ladder::wordlists::SliceSource;
//!
//! let mut resolver = Resolver::new(
//!     BreadthFirstSearch,
//!     SliceSource::new(&["cat", "cot", "cog", "dog", "dot"]),
//! );
//! resolver.load_dictionary().unwrap();
//!
//! let chains = resolver.solve("cat", "dog").unwrap();
//! assert_eq!(chains.len(), 2);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Search strategies and resolver
pub mod solver;

// Word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::LadderError;
