// TOML configuration shared by all wordchain tools.
//
// Example `wordchain.toml`:
//
//   dictionary = "/usr/share/dict/words"
//
//   [options]
//   min_overlap = 2
//   min_word_length = 3
//   max_steps = 8
//   allow_reuse = false

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wordchain_solver::ChainOptions;

use crate::CliError;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "wordchain.toml";

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Word list file, or a directory containing `words.txt`.
    pub dictionary: Option<PathBuf>,

    /// Solver and validator options.
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Option overrides. Unset keys keep the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsConfig {
    pub min_overlap: Option<usize>,
    pub min_word_length: Option<usize>,
    pub max_word_length: Option<usize>,
    pub max_steps: Option<usize>,
    pub allow_reuse: Option<bool>,
}

impl OptionsConfig {
    /// Overlay the keys that are set onto `base`.
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
        if let Some(v) = self.allow_reuse {
            base.allow_reuse = v;
        }
        base
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the configuration the tools run with.
    ///
    /// An explicit path (from `--config` or `WORDCHAIN_CONFIG`) must exist.
    /// Otherwise `./wordchain.toml` is read when present, and built-in
    /// defaults are used when it is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        if let Some(path) = explicit {
            log::info!("using config {}", path.display());
            return Self::from_file(path);
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            log::info!("using config {}", local.display());
            return Self::from_file(&local);
        }
        Ok(Self::default())
    }
}
