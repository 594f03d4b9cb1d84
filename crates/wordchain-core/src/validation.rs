// Move validation results

use std::fmt;

/// Why a proposed next word was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveRejection {
    /// One of the words is empty after normalization.
    EmptyOrInvalid,
    /// The proposed word is not in the filtered dictionary.
    NotInDictionary,
    /// The proposed word does not overlap the current word by the minimum.
    DoesNotLink,
    /// The proposed word already appears in the chain (game sessions only).
    AlreadyUsed,
    /// The chain has already reached its target (game sessions only).
    ChainComplete,
}

impl MoveRejection {
    /// Human-readable reason suitable for showing to a player.
    pub fn reason(self) -> &'static str {
        match self {
            MoveRejection::EmptyOrInvalid => "Empty or invalid characters",
            MoveRejection::NotInDictionary => "Word not in dictionary",
            MoveRejection::DoesNotLink => "Does not link",
            MoveRejection::AlreadyUsed => "Word already used",
            MoveRejection::ChainComplete => "Chain is already complete",
        }
    }
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Outcome of checking a single proposed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveValidation {
    pub valid: bool,
    pub reason: Option<MoveRejection>,
    /// The computed overlap. Present for accepted moves and for
    /// [`MoveRejection::DoesNotLink`] (where it is 0).
    pub overlap: Option<usize>,
}

impl MoveValidation {
    pub fn accepted(overlap: usize) -> Self {
        Self {
            valid: true,
            reason: None,
            overlap: Some(overlap),
        }
    }

    pub fn rejected(reason: MoveRejection) -> Self {
        let overlap = match reason {
            MoveRejection::DoesNotLink => Some(0),
            _ => None,
        };
        Self {
            valid: false,
            reason: Some(reason),
            overlap,
        }
    }

    /// The rejection reason as text, if the move was rejected.
    pub fn reason_text(&self) -> Option<&'static str> {
        self.reason.map(MoveRejection::reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_carries_overlap() {
        let v = MoveValidation::accepted(3);
        assert!(v.valid);
        assert_eq!(v.reason, None);
        assert_eq!(v.overlap, Some(3));
        assert_eq!(v.reason_text(), None);
    }

    #[test]
    fn does_not_link_reports_zero_overlap() {
        let v = MoveValidation::rejected(MoveRejection::DoesNotLink);
        assert!(!v.valid);
        assert_eq!(v.overlap, Some(0));
        assert_eq!(v.reason_text(), Some("Does not link"));
    }

    #[test]
    fn other_rejections_have_no_overlap() {
        for reason in [
            MoveRejection::EmptyOrInvalid,
            MoveRejection::NotInDictionary,
            MoveRejection::AlreadyUsed,
            MoveRejection::ChainComplete,
        ] {
            let v = MoveValidation::rejected(reason);
            assert!(!v.valid);
            assert_eq!(v.overlap, None);
        }
    }

    #[test]
    fn display_matches_reason() {
        assert_eq!(
            MoveRejection::EmptyOrInvalid.to_string(),
            "Empty or invalid characters"
        );
        assert_eq!(
            MoveRejection::NotInDictionary.to_string(),
            "Word not in dictionary"
        );
    }
}
