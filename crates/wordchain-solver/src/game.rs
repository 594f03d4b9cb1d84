// Interactive play: a player builds a chain one word at a time.
//
// Every submission goes through the same checks as the stateless move
// validator, against the last word played. The target word is always
// playable even if the dictionary filter dropped it.

use wordchain_core::chain::{ChainLink, Segment, Solution, fuse, fused_length, fused_segments};
use wordchain_core::options::ChainOptions;
use wordchain_core::validation::{MoveRejection, MoveValidation};
use wordchain_core::word::normalize_word;
use wordchain_index::Dictionary;

use crate::solve::SolveError;
use crate::validate::link;

/// One play session from a start word to a target word.
#[derive(Debug, Clone)]
pub struct ChainGame {
    target: String,
    chain: Vec<ChainLink>,
    dictionary: Dictionary,
    options: ChainOptions,
    complete: bool,
}

impl ChainGame {
    /// Start a session, filtering `dictionary` with `options`.
    pub fn new<I, S>(
        start: &str,
        target: &str,
        dictionary: I,
        options: ChainOptions,
    ) -> Result<Self, SolveError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = Dictionary::from_raw(dictionary, &options);
        Self::with_dictionary(start, target, dictionary, options)
    }

    /// Start a session over an already filtered dictionary.
    ///
    /// Fails with [`SolveError::InvalidInput`] if either word has no letters.
    pub fn with_dictionary(
        start: &str,
        target: &str,
        dictionary: Dictionary,
        options: ChainOptions,
    ) -> Result<Self, SolveError> {
        let start_norm = normalize_word(start);
        let target_norm = normalize_word(target);
        if start_norm.is_empty() || target_norm.is_empty() {
            return Err(SolveError::InvalidInput {
                start: start.to_string(),
                end: target.to_string(),
            });
        }

        let complete = start_norm == target_norm;
        Ok(Self {
            target: target_norm,
            chain: vec![ChainLink::new(start_norm, 0)],
            dictionary,
            options,
            complete,
        })
    }

    /// Try to append `word` to the chain.
    ///
    /// Accepted words are appended with their overlap; reaching the target
    /// completes the game, after which every submission is rejected.
    pub fn submit(&mut self, word: &str) -> MoveValidation {
        if self.complete {
            return MoveValidation::rejected(MoveRejection::ChainComplete);
        }

        let next = normalize_word(word);
        if next.is_empty() {
            return MoveValidation::rejected(MoveRejection::EmptyOrInvalid);
        }
        if next != self.target && !self.dictionary.contains(&next) {
            return MoveValidation::rejected(MoveRejection::NotInDictionary);
        }
        if !self.options.allow_reuse && self.chain.iter().any(|link| link.word == next) {
            return MoveValidation::rejected(MoveRejection::AlreadyUsed);
        }

        let result = link(self.current_word(), &next, &self.options);
        if let Some(overlap) = result.overlap.filter(|_| result.valid) {
            log::debug!("played {next} (overlap {overlap})");
            self.complete = next == self.target;
            self.chain.push(ChainLink::new(next, overlap));
        }
        result
    }

    /// Remove the last played word. The start word is never removed.
    pub fn undo(&mut self) -> Option<String> {
        if self.chain.len() <= 1 {
            return None;
        }
        let removed = self.chain.pop().map(|link| link.word);
        self.complete = self.current_word() == self.target;
        removed
    }

    /// Return to the start word.
    pub fn reset(&mut self) {
        self.chain.truncate(1);
        self.complete = self.current_word() == self.target;
    }

    /// The last word of the chain.
    pub fn current_word(&self) -> &str {
        self.chain.last().map(|link| link.word.as_str()).unwrap_or_default()
    }

    pub fn start(&self) -> &str {
        self.chain.first().map(|link| link.word.as_str()).unwrap_or_default()
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn steps(&self) -> usize {
        self.chain.len() - 1
    }

    pub fn characters(&self) -> usize {
        fused_length(&self.chain)
    }

    pub fn chain(&self) -> &[ChainLink] {
        &self.chain
    }

    pub fn fused(&self) -> String {
        fuse(&self.chain)
    }

    pub fn segments(&self) -> Vec<Segment> {
        fused_segments(&self.chain)
    }

    pub fn options(&self) -> &ChainOptions {
        &self.options
    }

    /// The finished chain, or `None` if the target has not been reached.
    pub fn into_solution(self) -> Option<Solution> {
        self.complete.then(|| Solution::from_chain(self.chain))
    }
}
