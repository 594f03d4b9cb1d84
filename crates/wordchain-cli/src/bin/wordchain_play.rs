// wordchain-play: Build a chain interactively.
//
// Reads one word per line from stdin and appends it to the chain when it
// links to the current word. Commands:
//   :undo    remove the last word
//   :reset   go back to the start word
//   :quit    stop playing
//
// When the target is reached the player's chain is compared with the
// engine's best solution.
//
// Usage:
//   wordchain-play [-d DICT_PATH] [OPTIONS] START TARGET

use std::io::{self, BufRead, Write};

use clap::Parser;
use wordchain_cli::{CommonArgs, OptionArgs};
use wordchain_solver::{ChainGame, MoveValidation, Solution, WordChain};

/// Play a word chain from START to TARGET.
#[derive(Debug, Parser)]
#[command(name = "wordchain-play", version)]
struct Cli {
    /// Start word
    start: String,

    /// Target word
    target: String,

    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    options: OptionArgs,
}

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Undo,
    Reset,
    Quit,
    Word(&'a str),
    Unknown(&'a str),
}

fn parse_input(line: &str) -> Option<Input<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(match line {
        ":undo" => Input::Undo,
        ":reset" => Input::Reset,
        ":quit" | ":q" => Input::Quit,
        cmd if cmd.starts_with(':') => Input::Unknown(cmd),
        word => Input::Word(word),
    })
}

fn render_move(word: &str, result: &MoveValidation) -> String {
    match (result.valid, result.reason_text()) {
        (true, _) => format!("+ {} (overlap {})", word.to_uppercase(), result.overlap.unwrap_or(0)),
        (false, Some(reason)) => format!("x {} ({reason})", word.to_uppercase()),
        (false, None) => format!("x {}", word.to_uppercase()),
    }
}

fn render_summary(played: &Solution, best: Option<&Solution>) -> String {
    let mut summary = format!(
        "done: {} steps, {} characters ({})",
        played.steps,
        played.characters,
        played.fused()
    );
    if let Some(best) = best {
        summary.push_str(&format!(
            "\nbest: {} steps, {} characters ({})",
            best.steps,
            best.characters,
            best.words().collect::<Vec<_>>().join(" -> ")
        ));
        if (played.steps, played.characters) <= (best.steps, best.characters) {
            summary.push_str("\nyou matched the best chain");
        }
    }
    summary
}

fn prompt(out: &mut impl Write, game: &ChainGame) {
    let _ = write!(out, "[{} | {} -> {}] > ", game.steps(), game.fused(), game.target());
    let _ = out.flush();
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
    let mut game = handle
        .new_game(&cli.start, &cli.target)
        .unwrap_or_else(|e| wordchain_cli::fatal(&e.to_string()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    prompt(&mut out, &game);
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        match parse_input(&line) {
            None => {}
            Some(Input::Quit) => break,
            Some(Input::Undo) => match game.undo() {
                Some(word) => {
                    let _ = writeln!(out, "- {word}");
                }
                None => {
                    let _ = writeln!(out, "nothing to undo");
                }
            },
            Some(Input::Reset) => game.reset(),
            Some(Input::Unknown(cmd)) => {
                let _ = writeln!(out, "unknown command {cmd} (:undo, :reset, :quit)");
            }
            Some(Input::Word(word)) => {
                let result = game.submit(word);
                let _ = writeln!(out, "{}", render_move(word, &result));
            }
        }

        if game.is_complete() {
            break;
        }
        prompt(&mut out, &game);
    }

    if !game.is_complete() {
        let _ = writeln!(out);
        return;
    }

    let best = handle.solve(game.start(), game.target()).ok();
    if let Some(played) = game.into_solution() {
        let _ = writeln!(out, "{}", render_summary(&played, best.as_ref()));
    }
}
