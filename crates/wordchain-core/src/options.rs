// Solver and validator options

/// Default minimum number of characters two consecutive words must share.
pub const DEFAULT_MIN_OVERLAP: usize = 2;

/// Default minimum word length admitted into the dictionary.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Error type for option combinations that can never produce a meaningful result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("min_overlap must be at least 1")]
    ZeroMinOverlap,
    #[error("max_word_length ({max}) is below min_word_length ({min})")]
    WordLengthRange { min: usize, max: usize },
}

/// Options shared by the solver and the move validator.
///
/// `max_steps` is ignored by the move validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChainOptions {
    /// Minimum overlap between consecutive words.
    pub min_overlap: usize,
    /// Words shorter than this are filtered out of the dictionary.
    pub min_word_length: usize,
    /// Words longer than this are filtered out of the dictionary (unbounded when `None`).
    pub max_word_length: Option<usize>,
    /// Maximum number of links in a solution (unbounded when `None`).
    pub max_steps: Option<usize>,
    /// Whether a word may appear more than once in a chain.
    pub allow_reuse: bool,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            min_overlap: DEFAULT_MIN_OVERLAP,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_word_length: None,
            max_steps: None,
            allow_reuse: false,
        }
    }
}

impl ChainOptions {
    /// The minimum overlap actually applied. An overlap of zero characters
    /// never links two words, so values below 1 behave as 1.
    #[inline]
    pub fn effective_min_overlap(&self) -> usize {
        self.min_overlap.max(1)
    }

    /// Check whether a normalized word length passes the dictionary length filter.
    #[inline]
    pub fn accepts_length(&self, len: usize) -> bool {
        len >= self.min_word_length && self.max_word_length.is_none_or(|max| len <= max)
    }

    /// Reject option combinations that are certainly mistakes.
    ///
    /// The engine itself accepts any options; front ends call this on
    /// user-supplied configuration.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.min_overlap == 0 {
            return Err(OptionsError::ZeroMinOverlap);
        }
        if let Some(max) = self.max_word_length {
            if max < self.min_word_length {
                return Err(OptionsError::WordLengthRange {
                    min: self.min_word_length,
                    max,
                });
            }
        }
        Ok(())
    }
}
