// wordchain-daily: Pick and solve the daily puzzle.
//
// The pair is chosen from the built-in starter words by date (UTC today by
// default) and solved with the daily options, either against the starter
// words themselves or against the discovered dictionary.
//
// Usage:
//   wordchain-daily [--date YYYY-MM-DD] [--word-list starter|dictionary] [--json]

use chrono::{NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use wordchain_cli::CommonArgs;
use wordchain_solver::daily::{DAILY_OPTIONS, STARTER_WORDS};
use wordchain_solver::{Solution, WordChain, daily_pair};

/// Pick the puzzle for a day and find its best chain.
#[derive(Debug, Parser)]
#[command(name = "wordchain-daily", version)]
struct Cli {
    /// Puzzle date (default: today, UTC)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Words the chain may use
    #[arg(long, value_enum, default_value = "starter")]
    word_list: WordSource,

    /// Print the puzzle as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WordSource {
    /// The built-in starter words
    Starter,
    /// The discovered dictionary
    Dictionary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DailyReport {
    date_id: String,
    start_word: String,
    target_word: String,
    solution: Option<Solution>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn date_id(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn main() {
    let cli = Cli::parse();

    let config = cli.common.init().unwrap_or_else(|e| wordchain_cli::fatal(&e.to_string()));
    let date_id = date_id(cli.date.unwrap_or_else(|| Utc::now().date_naive()));

    let pair = daily_pair(&date_id, STARTER_WORDS)
        .unwrap_or_else(|| wordchain_cli::fatal("starter word list has fewer than two words"));

    let words: Vec<String> = match cli.word_list {
        WordSource::Starter => STARTER_WORDS.iter().map(|w| w.to_string()).collect(),
        WordSource::Dictionary => cli
            .common
            .load_words(&config)
            .unwrap_or_else(|e| wordchain_cli::fatal(&e.to_string()))
            .words,
    };

    let handle = WordChain::with_options(&words, DAILY_OPTIONS);
    let solution = match handle.solve(&pair.start, &pair.target) {
        Ok(s) => Some(s),
        Err(e) => {
            log::info!("{e}");
            None
        }
    };

    let report = DailyReport {
        date_id,
        start_word: pair.start,
        target_word: pair.target,
        solution,
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => wordchain_cli::fatal(&e.to_string()),
        }
        return;
    }

    println!("{}: {} -> {}", report.date_id, report.start_word, report.target_word);
    match &report.solution {
        Some(s) => {
            println!("best: {}", s.words().collect::<Vec<_>>().join(" -> "));
            println!("steps: {}, characters: {}", s.steps, s.characters);
        }
        None => println!(
            "no chain within {} steps",
            DAILY_OPTIONS.max_steps.unwrap_or_default()
        ),
    }
}
