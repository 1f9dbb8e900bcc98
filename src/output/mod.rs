//! Terminal output formatting
//!
//! Display utilities for solve and comparison results.

pub mod display;
pub mod formatters;

pub use display::{print_comparison, print_solutions, print_solve_result};
