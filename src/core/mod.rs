//! Core domain types for word ladders
//!
//! Words, the adjacency predicate, chains and the loaded dictionary. Everything
//! here is pure and independent of any search strategy.

mod adjacency;
mod chain;
mod dictionary;
mod word;

pub use adjacency::{is_adjacent, is_reachable, neighbours, similarity, useful_words};
pub use chain::{Chain, best_solutions, flip_sequence, is_valid_chain};
pub use dictionary::Dictionary;
pub use word::{Word, WordError};
