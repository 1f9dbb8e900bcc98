//! Display functions for command results

use super::formatters::{format_chain, format_millis, format_solution_line};
use crate::commands::{CompareResult, SolveResult};
use crate::core::Chain;
use colored::Colorize;

/// Print a list of chains
///
/// Prints "no solution found" for an empty list, otherwise the solution count
/// followed by one numbered line per chain.
pub fn print_solutions(chains: &[Chain]) {
    if chains.is_empty() {
        println!("{}", "no solution found".red().bold());
        return;
    }

    println!(
        "{}",
        format!("found {} solution(s)", chains.len()).green().bold()
    );
    for (index, chain) in chains.iter().enumerate() {
        println!("{}", format_solution_line(index, chain));
    }
}

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    print_solutions(&result.chains);

    if verbose {
        println!(
            "{}",
            format!(
                "strategy {} in {}",
                result.strategy,
                format_millis(result.duration)
            )
            .bright_black()
        );
    }
}

/// Print the result of a strategy comparison
pub fn print_comparison(result: &CompareResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {}",
        "STRATEGY COMPARISON:".bright_cyan().bold(),
        result.from.bright_yellow().bold(),
        result.to.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let best = result.best_length();

    for run in &result.runs {
        let length = match run.chain_length() {
            Some(len) if Some(len) == best => format!("length {len}").green(),
            Some(len) => format!("length {len}").yellow(),
            None => "no solution".red(),
        };

        println!(
            "\n  {:<8} {:>3} chain(s)  {}  {}",
            run.strategy.bold(),
            run.chains.len(),
            length,
            format_millis(run.duration).bright_black()
        );

        if let Some(chain) = run.chains.first() {
            println!("           {}", format_chain(chain));
        }
    }
    println!();
}
