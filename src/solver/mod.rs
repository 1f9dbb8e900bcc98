//! Word ladder search strategies
//!
//! Breadth-first, greedy and A* search over the implicit word graph, plus the
//! resolver that ties a strategy to a loaded dictionary.

mod astar;
mod bfs;
pub mod greedy;
mod node;
mod resolver;
pub mod strategy;

pub use astar::AStarSearch;
pub use bfs::BreadthFirstSearch;
pub use greedy::GreedySearch;
pub use resolver::Resolver;
pub use strategy::{Strategy, StrategyType};
