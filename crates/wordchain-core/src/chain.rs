// Chain links, solutions, and fused-string materialization.
//
// The fused string of a chain is the concatenation of its words after
// merging each consecutive pair at their overlap: the first word is taken
// whole and every later word contributes only the part past its overlap.

use crate::word::normalize_word;

/// One word in a chain and the number of characters it shares with its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainLink {
    pub word: String,
    /// Overlap with the previous word. Always 0 for the first link.
    pub overlap: usize,
}

impl ChainLink {
    pub fn new(word: impl Into<String>, overlap: usize) -> Self {
        Self {
            word: word.into(),
            overlap,
        }
    }
}

/// A solved chain from start to end word inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub chain: Vec<ChainLink>,
    /// Number of links (`chain.len() - 1`).
    pub steps: usize,
    /// Fused character count of the chain.
    pub characters: usize,
}

impl Solution {
    /// Build a solution from an ordered chain.
    ///
    /// The first link's overlap is forced to 0; `steps` and `characters` are
    /// derived from the chain alone.
    pub fn from_chain(mut chain: Vec<ChainLink>) -> Self {
        if let Some(first) = chain.first_mut() {
            first.overlap = 0;
        }
        let characters = fused_length(&chain);
        let steps = chain.len().saturating_sub(1);
        Self {
            chain,
            steps,
            characters,
        }
    }

    /// Iterate over the words of the chain in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.chain.iter().map(|link| link.word.as_str())
    }

    /// The merged string of the whole chain.
    pub fn fused(&self) -> String {
        fuse(&self.chain)
    }
}

/// A display segment of a fused string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub text: String,
    /// `true` if these characters are shared between two consecutive words.
    pub is_overlap: bool,
    /// Index of the chain word this segment is attributed to.
    pub word_index: usize,
}

/// Compute the fused character count of a chain.
///
/// The first word contributes its full normalized length; every subsequent
/// word contributes `max(0, length - overlap)`. The result depends only on
/// the chain, so recomputing it from a finished solution reproduces the
/// value accumulated during search.
pub fn fused_length(chain: &[ChainLink]) -> usize {
    let Some((first, rest)) = chain.split_first() else {
        return 0;
    };
    rest.iter().fold(normalize_word(&first.word).len(), |total, link| {
        total + normalize_word(&link.word).len().saturating_sub(link.overlap)
    })
}

/// Build the fused string of a chain.
///
/// `fuse(chain).len() == fused_length(chain)` for every chain.
pub fn fuse(chain: &[ChainLink]) -> String {
    let mut fused = String::new();
    for (i, link) in chain.iter().enumerate() {
        let word = normalize_word(&link.word);
        let skip = if i == 0 { 0 } else { link.overlap.min(word.len()) };
        fused.push_str(&word[skip..]);
    }
    fused
}

/// Split the fused string of a chain into display segments.
///
/// For each word after the first with a non-zero overlap, the trailing
/// overlap characters of the preceding non-overlap segment are split off and
/// attributed to the new word as an overlap segment. The remainder of the
/// word follows as a non-overlap segment. Concatenating all segment texts
/// yields [`fuse`].
pub fn fused_segments(chain: &[ChainLink]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for (i, link) in chain.iter().enumerate() {
        let word = normalize_word(&link.word);
        if i == 0 {
            if !word.is_empty() {
                segments.push(Segment {
                    text: word,
                    is_overlap: false,
                    word_index: 0,
                });
            }
            continue;
        }

        let overlap = link.overlap.min(word.len());
        if overlap > 0 {
            if let Some(last) = segments.last_mut() {
                if !last.is_overlap && last.text.len() >= overlap {
                    let split_at = last.text.len() - overlap;
                    let shared = last.text.split_off(split_at);
                    let shared_segment = Segment {
                        text: shared,
                        is_overlap: true,
                        word_index: i,
                    };
                    if last.text.is_empty() {
                        *last = shared_segment;
                    } else {
                        segments.push(shared_segment);
                    }
                }
            }
        }

        let remainder = &word[overlap..];
        if !remainder.is_empty() {
            segments.push(Segment {
                text: remainder.to_string(),
                is_overlap: false,
                word_index: i,
            });
        }
    }

    segments
}
