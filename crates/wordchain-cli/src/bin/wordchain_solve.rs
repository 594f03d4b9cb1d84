// wordchain-solve: Find the best chain between two words.
//
// Prints the chain, its step and character counts and the fused string:
//   STONE -> ONEWAY -> WAYLAND -> LAND
//   steps: 3
//   characters: 12
//   fused: STONEWAYLAND
//
// Usage:
//   wordchain-solve [-d DICT_PATH] [OPTIONS] START END

use clap::Parser;
use serde::Serialize;
use wordchain_cli::{CommonArgs, OptionArgs};
use wordchain_solver::{Solution, WordChain};

/// Find the best word chain from START to END.
#[derive(Debug, Parser)]
#[command(name = "wordchain-solve", version)]
struct Cli {
    /// Start word
    start: String,

    /// End word
    end: String,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    options: OptionArgs,
}

#[derive(Serialize)]
struct SolveReport<'a> {
    #[serde(flatten)]
    solution: &'a Solution,
    fused: String,
}

fn render_text(solution: &Solution) -> String {
    let words: Vec<&str> = solution.words().collect();
    format!(
        "{}\nsteps: {}\ncharacters: {}\nfused: {}",
        words.join(" -> "),
        solution.steps,
        solution.characters,
        solution.fused()
    )
}

fn main() {
    let cli = Cli::parse();

    let config = cli.common.init().unwrap_or_else(|e| wordchain_cli::fatal(&e.to_string()));
    let options = cli
        .options
        .resolve(&config)
        .unwrap_or_else(|e| wordchain_cli::fatal(&e.to_string()));
    let list = cli
        .common
        .load_words(&config)
        .unwrap_or_else(|e| wordchain_cli::fatal(&e.to_string()));

    let handle = WordChain::with_options(&list.words, options);
    let solution = handle
        .solve(&cli.start, &cli.end)
        .unwrap_or_else(|e| wordchain_cli::fatal(&e.to_string()));

    if cli.json {
        let report = SolveReport {
            solution: &solution,
            fused: solution.fused(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => wordchain_cli::fatal(&e.to_string()),
        }
    } else {
        println!("{}", render_text(&solution));
    }
}
