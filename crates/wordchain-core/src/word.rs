// Word normalization: the canonical comparable form of raw input.

/// Check whether a character belongs to the Latin alphabet (`A-Z`, `a-z`).
///
/// Accented letters and other scripts are not part of the word universe and
/// are stripped by [`normalize_word`].
#[inline]
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Canonicalize raw input into a word.
///
/// Every character outside `A-Z`/`a-z` is removed and the rest is uppercased.
/// The function is total: empty or letterless input yields an empty string,
/// which callers treat as invalid.
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(|&c| is_latin_letter(c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Check whether `raw` is already in canonical form and non-empty.
pub fn is_normalized(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_uppercase())
}
