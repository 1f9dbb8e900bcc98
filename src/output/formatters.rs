//! Formatting utilities for terminal output

use crate::core::Word;
use std::time::Duration;

/// Separator placed between consecutive words of a chain
pub const CHAIN_SEPARATOR: &str = " -> ";

/// Join a chain's words with arrows
#[must_use]
pub fn format_chain(chain: &[Word]) -> String {
    chain
        .iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(CHAIN_SEPARATOR)
}

/// Format one numbered solution line (1-indexed)
#[must_use]
pub fn format_solution_line(index: usize, chain: &[Word]) -> String {
    format!("solution #{} : {}", index + 1, format_chain(chain))
}

/// Format a duration in milliseconds with two decimals
#[must_use]
pub fn format_millis(duration: Duration) -> String {
    format!("{:.2}ms", duration.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn chain_joined_with_arrows() {
        let chain = words_from_slice(&["cat", "cot", "cog", "dog"]);
        assert_eq!(format_chain(&chain), "cat -> cot -> cog -> dog");
    }

    #[test]
    fn single_word_chain_has_no_arrow() {
        let chain = words_from_slice(&["dog"]);
        assert_eq!(format_chain(&chain), "dog");
    }

    #[test]
    fn solution_lines_are_one_indexed() {
        let chain = words_from_slice(&["cat", "cot"]);
        assert_eq!(format_solution_line(0, &chain), "solution #1 : cat -> cot");
        assert_eq!(format_solution_line(4, &chain), "solution #5 : cat -> cot");
    }

    #[test]
    fn millis_two_decimals() {
        assert_eq!(format_millis(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_millis(Duration::ZERO), "0.00ms");
    }
}
