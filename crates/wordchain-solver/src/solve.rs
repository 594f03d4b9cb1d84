// Top-level solve: normalize endpoints, build the search universe, search.

use wordchain_core::chain::Solution;
use wordchain_core::options::ChainOptions;
use wordchain_core::word::normalize_word;
use wordchain_index::{Dictionary, PrefixIndex};

use crate::search::ChainSearch;

/// Why a solve produced no chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The start or end word is empty after normalization. No search was run.
    #[error("invalid input: start {start:?} or end {end:?} has no letters")]
    InvalidInput { start: String, end: String },

    /// The search exhausted every reachable state without reaching the end word.
    #[error("no chain from {start} to {end}")]
    NoSolution { start: String, end: String },
}

/// Find the best chain from `start_word` to `end_word`.
///
/// The dictionary is filtered with `options` and both endpoints are forced
/// into it, so an endpoint that fails the length filter can still be used.
/// The returned chain has the fewest possible links and, among those, the
/// smallest fused character count.
pub fn solve<I, S>(
    start_word: &str,
    end_word: &str,
    dictionary: I,
    options: &ChainOptions,
) -> Result<Solution, SolveError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let start = normalize_word(start_word);
    let end = normalize_word(end_word);
    if start.is_empty() || end.is_empty() {
        return Err(SolveError::InvalidInput {
            start: start_word.to_string(),
            end: end_word.to_string(),
        });
    }

    let dictionary = Dictionary::from_raw(dictionary, options);
    solve_in(&start, &end, dictionary, options)
}

/// Solve over an already filtered dictionary with normalized, non-empty endpoints.
pub(crate) fn solve_in(
    start: &str,
    end: &str,
    mut dictionary: Dictionary,
    options: &ChainOptions,
) -> Result<Solution, SolveError> {
    let (start_id, end_id) = dictionary.force_endpoints(start, end);
    let index = PrefixIndex::build(&dictionary, options.effective_min_overlap());
    log::debug!(
        "solving {start} -> {end}: {} words, {} prefixes",
        dictionary.len(),
        index.prefix_count()
    );

    let outcome = ChainSearch::new(&dictionary, &index, options).run(start_id, end_id);
    outcome
        .to_solution(&dictionary)
        .ok_or_else(|| SolveError::NoSolution {
            start: start.to_string(),
            end: end.to_string(),
        })
}
