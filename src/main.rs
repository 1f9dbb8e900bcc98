//! Word Ladder Solver - CLI
//!
//! Finds word chains between two dictionary words using breadth-first, greedy
//! or A* search.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;
use word_ladder::{
    commands::{SolveConfig, compare_strategies, load_resolver, solve_pair},
    output::{print_comparison, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find word chains changing one letter at a time",
    after_help = "example:\n  word_ladder ./data/words.txt cat dog\n  word_ladder builtin cold warm --strategy astar",
    version,
    author
)]
struct Cli {
    /// Path to a line-delimited word list, or 'builtin' for the embedded list
    dictionary: String,

    /// Start word
    from: String,

    /// Goal word
    to: String,

    /// Strategy: bfs (default), greedy, astar
    #[arg(short, long, default_value = "bfs")]
    strategy: String,

    /// Run every strategy and compare results
    #[arg(long)]
    compare: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = SolveConfig::new(cli.dictionary, cli.from, cli.to).with_strategy(cli.strategy);

    let resolver = load_resolver(&config).context("error while loading word list")?;

    if cli.compare {
        let result = compare_strategies(&resolver, &config.from, &config.to)
            .context("error while solving word chains")?;
        print_comparison(&result);
        return Ok(());
    }

    let result = solve_pair(&resolver, &config.from, &config.to)
        .context("error while solving word chains")?;
    print_solve_result(&result, cli.verbose > 0);
    Ok(())
}

/// Configure `env_logger`; `RUST_LOG` takes precedence over `-v` flags
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}
