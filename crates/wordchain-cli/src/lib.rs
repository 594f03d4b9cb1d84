// wordchain-cli: shared utilities for CLI tools.

pub mod config;

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args};
use wordchain_solver::{ChainOptions, OptionsError, SolveError};

pub use config::CliConfig;

/// Word list file name looked up inside dictionary directories.
const WORDS_FILE: &str = "words.txt";

/// Per-user dictionary directory under `$HOME`.
const USER_DICT_DIR: &str = ".wordchain";

/// System word list shipped by most Unix distributions.
const SYSTEM_WORDS: &str = "/usr/share/dict/words";

/// Errors surfaced by the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("could not find a word list in any of the search paths:\n{}", format_paths(.searched))]
    DictionaryNotFound { searched: Vec<PathBuf> },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid options: {0}")]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Shared arguments
// ============================================================================

/// Arguments every tool accepts.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Word list file, or a directory containing words.txt
    #[arg(short = 'd', long, value_name = "PATH")]
    pub dict_path: Option<PathBuf>,

    /// Configuration file (default: ./wordchain.toml if present)
    #[arg(short, long, value_name = "FILE", env = "WORDCHAIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Install the logger and load the configuration file.
    pub fn init(&self) -> Result<CliConfig, CliError> {
        init_logging(self.verbose);
        CliConfig::load(self.config.as_deref())
    }

    /// Discover and read the word list. `--dict-path` wins over the config file.
    pub fn load_words(&self, config: &CliConfig) -> Result<WordList, CliError> {
        load_dictionary(self.dict_path.as_deref().or(config.dictionary.as_deref()))
    }
}

/// Command-line overrides for [`ChainOptions`].
#[derive(Debug, Clone, Default, Args)]
pub struct OptionArgs {
    /// Minimum overlap between consecutive words
    #[arg(long, value_name = "N")]
    pub min_overlap: Option<usize>,

    /// Shortest word admitted into the dictionary
    #[arg(long, value_name = "N")]
    pub min_word_length: Option<usize>,

    /// Longest word admitted into the dictionary
    #[arg(long, value_name = "N")]
    pub max_word_length: Option<usize>,

    /// Maximum number of links in a solution
    #[arg(long, value_name = "N")]
    pub max_steps: Option<usize>,

    /// Allow a word to appear more than once in a chain
    #[arg(long, overrides_with = "no_allow_reuse")]
    pub allow_reuse: bool,

    /// Forbid repeated words even if the config file allows them
    #[arg(long, overrides_with = "allow_reuse")]
    pub no_allow_reuse: bool,
}

impl OptionArgs {
    /// Overlay the flags that were given onto `base`.
    pub fn apply(&self, mut base: ChainOptions) -> ChainOptions {
        if let Some(v) = self.min_overlap {
            base.min_overlap = v;
        }
        if let Some(v) = self.min_word_length {
            base.min_word_length = v;
        }
        if self.max_word_length.is_some() {
            base.max_word_length = self.max_word_length;
        }
        if self.max_steps.is_some() {
            base.max_steps = self.max_steps;
        }
        if self.allow_reuse {
            base.allow_reuse = true;
        } else if self.no_allow_reuse {
            base.allow_reuse = false;
        }
        base
    }

    /// Defaults, then the config file, then these flags. The result is validated.
    pub fn resolve(&self, config: &CliConfig) -> Result<ChainOptions, CliError> {
        let options = self.apply(config.options.apply(ChainOptions::default()));
        options.validate()?;
        log::debug!("options: {options:?}");
        Ok(options)
    }
}

/// Install `env_logger` at a level chosen by the `-v` count. `RUST_LOG` overrides it.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

// ============================================================================
// Dictionary discovery
// ============================================================================

/// A word list read from disk.
#[derive(Debug, Clone)]
pub struct WordList {
    pub path: PathBuf,
    pub words: Vec<String>,
}

/// Search for a word list and read it.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `WORDCHAIN_DICT_PATH` environment variable
/// 3. `~/.wordchain/words.txt`
/// 4. `/usr/share/dict/words`
/// 5. `words.txt` in the current directory
///
/// A directory entry stands for the `words.txt` inside it.
pub fn load_dictionary(dict_path: Option<&Path>) -> Result<WordList, CliError> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        if candidate.is_file() {
            let words = read_word_list(candidate)?;
            log::info!("loaded {} words from {}", words.len(), candidate.display());
            return Ok(WordList {
                path: candidate.clone(),
                words,
            });
        }
    }

    Err(CliError::DictionaryNotFound {
        searched: search_paths,
    })
}

/// Build the list of word list files to try, in order.
fn build_search_paths(dict_path: Option<&Path>) -> Vec<PathBuf> {
    search_paths_from(
        dict_path,
        std::env::var_os("WORDCHAIN_DICT_PATH").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
        std::env::current_dir().ok(),
    )
}

fn search_paths_from(
    dict_path: Option<&Path>,
    env_path: Option<PathBuf>,
    home: Option<PathBuf>,
    cwd: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(word_file(p));
    }

    // 2. WORDCHAIN_DICT_PATH environment variable
    if let Some(p) = env_path {
        paths.push(word_file(&p));
    }

    // 3. Home directory
    if let Some(home) = home {
        paths.push(home.join(USER_DICT_DIR).join(WORDS_FILE));
    }

    // 4. System word list
    paths.push(PathBuf::from(SYSTEM_WORDS));

    // 5. Current directory
    if let Some(cwd) = cwd {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

fn word_file(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(WORDS_FILE)
    } else {
        path.to_path_buf()
    }
}

/// Read a word list file. See [`parse_word_list`] for the format.
pub fn read_word_list(path: &Path) -> Result<Vec<String>, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_word_list(&text))
}

/// One word per line; blank lines and `#` comments are skipped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
