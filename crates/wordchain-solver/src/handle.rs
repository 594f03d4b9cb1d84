// WordChain: owned dictionary + options facade.
//
// The handle keeps the raw word list and the options, and caches the
// filtered dictionary. Setters that change the length filter rebuild the
// cache; every solve still works on its own copy, so no search state is ever
// shared between calls.

use wordchain_core::chain::Solution;
use wordchain_core::options::ChainOptions;
use wordchain_core::validation::MoveValidation;
use wordchain_core::word::normalize_word;
use wordchain_index::Dictionary;

use crate::daily::{DailyPair, daily_pair};
use crate::game::ChainGame;
use crate::solve::{SolveError, solve_in};
use crate::validate::validate_move;

/// A word list plus the options every operation runs with.
#[derive(Debug, Clone)]
pub struct WordChain {
    words: Vec<String>,
    options: ChainOptions,
    dictionary: Dictionary,
}

impl WordChain {
    /// Create a handle with default options.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_options(words, ChainOptions::default())
    }

    pub fn with_options<I, S>(words: I, options: ChainOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_string()).collect();
        let dictionary = Dictionary::from_raw(&words, &options);
        log::debug!("word list: {} entries, {} after filtering", words.len(), dictionary.len());
        Self {
            words,
            options,
            dictionary,
        }
    }

    /// Find the best chain from `start` to `end`. See [`crate::solve()`].
    pub fn solve(&self, start: &str, end: &str) -> Result<Solution, SolveError> {
        let start_norm = normalize_word(start);
        let end_norm = normalize_word(end);
        if start_norm.is_empty() || end_norm.is_empty() {
            return Err(SolveError::InvalidInput {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        solve_in(&start_norm, &end_norm, self.dictionary.clone(), &self.options)
    }

    /// Check a single move. See [`crate::is_valid_move`].
    pub fn is_valid_move(&self, prev: &str, next: &str) -> MoveValidation {
        validate_move(&self.dictionary, prev, next, &self.options)
    }

    /// Start an interactive session over this handle's dictionary.
    pub fn new_game(&self, start: &str, target: &str) -> Result<ChainGame, SolveError> {
        ChainGame::with_dictionary(start, target, self.dictionary.clone(), self.options)
    }

    /// Pick the day's pair from the filtered dictionary.
    pub fn daily_pair(&self, date_id: &str) -> Option<DailyPair> {
        daily_pair(date_id, self.dictionary.words())
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    pub fn set_min_overlap(&mut self, value: usize) {
        self.options.min_overlap = value;
    }

    /// Set the minimum word length and refilter the dictionary.
    pub fn set_min_word_length(&mut self, value: usize) {
        self.options.min_word_length = value;
        self.refilter();
    }

    /// Set the maximum word length (`None` for unbounded) and refilter the dictionary.
    pub fn set_max_word_length(&mut self, value: Option<usize>) {
        self.options.max_word_length = value;
        self.refilter();
    }

    pub fn set_max_steps(&mut self, value: Option<usize>) {
        self.options.max_steps = value;
    }

    pub fn set_allow_reuse(&mut self, value: bool) {
        self.options.allow_reuse = value;
    }

    /// Replace all options at once.
    pub fn set_options(&mut self, options: ChainOptions) {
        self.options = options;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.dictionary = Dictionary::from_raw(&self.words, &self.options);
    }

    pub fn options(&self) -> &ChainOptions {
        &self.options
    }

    /// The filtered dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
