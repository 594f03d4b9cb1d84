// wordchain-check: Validate single moves.
//
// Checks PREV NEXT from the command line, or one "PREV NEXT" pair per line
// from stdin. Output format:
//   OK: NEXT (overlap N)
//   NO: NEXT (reason)
//
// Usage:
//   wordchain-check [-d DICT_PATH] [OPTIONS] [PREV NEXT]

use std::io::{self, BufRead, Write};

use clap::Parser;
use wordchain_cli::{CommonArgs, OptionArgs};
use wordchain_solver::{MoveValidation, WordChain};

/// Check whether NEXT may follow PREV in a chain.
#[derive(Debug, Parser)]
#[command(name = "wordchain-check", version)]
struct Cli {
    /// Current word (reads pairs from stdin when omitted)
    #[arg(requires = "next")]
    prev: Option<String>,

    /// Proposed next word
    next: Option<String>,

    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    options: OptionArgs,
}

fn render(next: &str, result: &MoveValidation) -> String {
    match (result.valid, result.reason_text()) {
        (true, _) => format!("OK: {next} (overlap {})", result.overlap.unwrap_or(0)),
        (false, Some(reason)) => format!("NO: {next} ({reason})"),
        (false, None) => format!("NO: {next}"),
    }
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

    if let (Some(prev), Some(next)) = (&cli.prev, &cli.next) {
        let result = handle.is_valid_move(prev, next);
        println!("{}", render(next, &result));
        if !result.valid {
            std::process::exit(1);
        }
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let mut parts = line.split_whitespace();
        let (Some(prev), Some(next)) = (parts.next(), parts.next()) else {
            if !line.trim().is_empty() {
                log::warn!("skipping line without two words: {line:?}");
            }
            continue;
        };
        let _ = writeln!(out, "{}", render(next, &handle.is_valid_move(prev, next)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordchain_solver::MoveRejection;

    #[test]
    fn renders_accepted_move() {
        assert_eq!(render("ONEWAY", &MoveValidation::accepted(3)), "OK: ONEWAY (overlap 3)");
    }

    #[test]
    fn renders_rejected_move() {
        let v = MoveValidation::rejected(MoveRejection::DoesNotLink);
        assert_eq!(render("DOG", &v), "NO: DOG (Does not link)");
    }

    #[test]
    fn pair_is_optional_but_complete() {
        let cli = Cli::try_parse_from(["wordchain-check"]).unwrap();
        assert!(cli.prev.is_none());
        let cli = Cli::try_parse_from(["wordchain-check", "stone", "oneway"]).unwrap();
        assert_eq!(cli.next.as_deref(), Some("oneway"));
        assert!(Cli::try_parse_from(["wordchain-check", "stone"]).is_err());
    }
}
