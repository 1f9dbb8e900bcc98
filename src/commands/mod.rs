//! Command implementations

pub mod compare;
pub mod solve;

pub use compare::{CompareResult, StrategyRun, compare_strategies};
pub use solve::{
    BUILTIN_DICTIONARY, DictionarySource, SolveConfig, SolveResult, load_resolver, solve_pair,
};
