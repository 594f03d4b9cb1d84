// Single-move validation.
//
// Checks one proposed next word against the current word without running a
// search: normalization, dictionary membership, then overlap.

use wordchain_core::options::ChainOptions;
use wordchain_core::validation::{MoveRejection, MoveValidation};
use wordchain_core::word::normalize_word;
use wordchain_index::Dictionary;

use crate::overlap::overlap_normalized;

/// Check whether `next_word` may follow `prev_word`.
///
/// The raw dictionary is filtered with `options` first; `max_steps` and
/// `allow_reuse` are ignored.
pub fn is_valid_move<I, S>(
    prev_word: &str,
    next_word: &str,
    dictionary: I,
    options: &ChainOptions,
) -> MoveValidation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let dictionary = Dictionary::from_raw(dictionary, options);
    validate_move(&dictionary, prev_word, next_word, options)
}

/// [`is_valid_move`] against an already filtered dictionary.
pub fn validate_move(
    dictionary: &Dictionary,
    prev_word: &str,
    next_word: &str,
    options: &ChainOptions,
) -> MoveValidation {
    let prev = normalize_word(prev_word);
    let next = normalize_word(next_word);
    if prev.is_empty() || next.is_empty() {
        return MoveValidation::rejected(MoveRejection::EmptyOrInvalid);
    }
    if !dictionary.contains(&next) {
        return MoveValidation::rejected(MoveRejection::NotInDictionary);
    }
    link(&prev, &next, options)
}

/// Overlap check for normalized, non-empty words.
pub(crate) fn link(prev: &str, next: &str, options: &ChainOptions) -> MoveValidation {
    match overlap_normalized(next, prev, options.effective_min_overlap()) {
        0 => MoveValidation::rejected(MoveRejection::DoesNotLink),
        k => MoveValidation::accepted(k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ChainOptions {
        ChainOptions::default()
    }

    #[test]
    fn linking_dictionary_word_is_valid() {
        let v = is_valid_move("STONE", "ONEWAY", ["ONEWAY"], &defaults());
        assert!(v.valid);
        assert_eq!(v.overlap, Some(3));
        assert_eq!(v.reason, None);
    }

    #[test]
    fn unlinked_word_reports_zero_overlap() {
        let v = is_valid_move("CAT", "DOG", ["DOG"], &defaults());
        assert!(!v.valid);
        assert_eq!(v.reason_text(), Some("Does not link"));
        assert_eq!(v.overlap, Some(0));
    }

    #[test]
    fn empty_words_are_rejected_first() {
        for (prev, next) in [("", "DOG"), ("CAT", "42"), ("!!", "??")] {
            let v = is_valid_move(prev, next, ["DOG"], &defaults());
            assert_eq!(v.reason, Some(MoveRejection::EmptyOrInvalid));
            assert_eq!(v.overlap, None);
        }
    }

    #[test]
    fn unknown_word_is_rejected() {
        let v = is_valid_move("STONE", "ONEWAY", ["ONSET"], &defaults());
        assert_eq!(v.reason_text(), Some("Word not in dictionary"));
        assert_eq!(v.overlap, None);
    }

    #[test]
    fn filtered_out_word_is_not_in_dictionary() {
        let options = ChainOptions {
            max_word_length: Some(5),
            ..defaults()
        };
        let v = is_valid_move("STONE", "ONEWAY", ["ONEWAY"], &options);
        assert_eq!(v.reason, Some(MoveRejection::NotInDictionary));
    }

    #[test]
    fn previous_word_need_not_be_in_dictionary() {
        let v = is_valid_move("stone", "one-way", ["oneway"], &defaults());
        assert!(v.valid);
        assert_eq!(v.overlap, Some(3));
    }

    #[test]
    fn minimum_overlap_applies() {
        let strict = ChainOptions {
            min_overlap: 4,
            ..defaults()
        };
        let v = is_valid_move("STONE", "ONEWAY", ["ONEWAY"], &strict);
        assert_eq!(v.reason, Some(MoveRejection::DoesNotLink));
    }

    #[test]
    fn prebuilt_dictionary_gives_same_answer() {
        let dict = Dictionary::from_raw(["ONEWAY", "WAYLAND"], &defaults());
        assert_eq!(
            validate_move(&dict, "ONEWAY", "WAYLAND", &defaults()),
            is_valid_move("ONEWAY", "WAYLAND", ["ONEWAY", "WAYLAND"], &defaults())
        );
    }
}
