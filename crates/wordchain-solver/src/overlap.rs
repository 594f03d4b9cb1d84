// Overlap between consecutive words

use wordchain_core::word::normalize_word;

/// Length of the longest suffix of `prev` that is a prefix of `next`.
///
/// Both words are normalized first. Candidate lengths are tried from
/// `prev.len() - 1` down to `min_overlap`, so the whole of `prev` never
/// counts and the tightest possible overlap wins. Returns 0 if no candidate
/// length of at least `min_overlap` matches.
pub fn overlap(next: &str, prev: &str, min_overlap: usize) -> usize {
    overlap_normalized(&normalize_word(next), &normalize_word(prev), min_overlap)
}

/// [`overlap()`] for words that are already normalized (ASCII uppercase).
pub(crate) fn overlap_normalized(next: &str, prev: &str, min_overlap: usize) -> usize {
    let min_overlap = min_overlap.max(1);
    (min_overlap..prev.len())
        .rev()
        .find(|&len| next.starts_with(&prev[prev.len() - len..]))
        .unwrap_or(0)
}
