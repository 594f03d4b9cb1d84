// Dictionary filter and word interning.
//
// Words are stored once and referred to by a dense `WordId` everywhere else,
// so the search engine hashes and copies 4-byte ids instead of strings.

use hashbrown::{HashMap, HashSet};
use wordchain_core::options::ChainOptions;
use wordchain_core::word::{is_normalized, normalize_word};

/// Dense index of a word within a [`Dictionary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Normalize, deduplicate and length-filter a raw word list.
///
/// Each entry is normalized; empty results, repeats of an earlier entry, and
/// words outside `min_word_length..=max_word_length` are dropped. The first
/// occurrence of a word wins and input order is otherwise preserved.
pub fn filter_words<I, S>(raw: I, options: &ChainOptions) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for entry in raw {
        let word = normalize_word(entry.as_ref());
        if word.is_empty() || !options.accepts_length(word.len()) {
            continue;
        }
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    words
}

/// An ordered set of unique normalized words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    ids: HashMap<String, WordId>,
}

impl Dictionary {
    /// Build a dictionary from a raw word list with [`filter_words`] semantics.
    pub fn from_raw<I, S>(raw: I, options: &ChainOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_filtered(filter_words(raw, options))
    }

    /// Build a dictionary from words that are already normalized and unique.
    pub fn from_filtered(words: Vec<String>) -> Self {
        debug_assert!(words.iter().all(|w| is_normalized(w)), "unnormalized word in dictionary");
        let ids = Self::assign_ids(&words);
        debug_assert_eq!(ids.len(), words.len(), "duplicate words in dictionary");
        Self { words, ids }
    }

    fn assign_ids(words: &[String]) -> HashMap<String, WordId> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), WordId(i as u32)))
            .collect()
    }

    /// Ensure a normalized word is present, inserting it at the front if missing.
    ///
    /// Used to force the start and end words into the search universe even
    /// when the length filter dropped them. Inserting renumbers every word, so
    /// ids obtained before the call are invalidated.
    pub fn force_front(&mut self, word: &str) -> WordId {
        if let Some(id) = self.id(word) {
            return id;
        }
        debug_assert!(is_normalized(word), "unnormalized word {word:?}");
        self.words.insert(0, word.to_string());
        self.ids = Self::assign_ids(&self.words);
        WordId(0)
    }

    /// Force both endpoints of a search into the dictionary.
    ///
    /// The start word is inserted first and the end word second, so when both
    /// are missing the end word ends up at index 0 and the start word at 1.
    /// Returns the ids of `(start, end)` valid after both insertions.
    pub fn force_endpoints(&mut self, start: &str, end: &str) -> (WordId, WordId) {
        let mut start_id = self.force_front(start);
        let end_id = match self.id(end) {
            Some(id) => id,
            None => {
                let id = self.force_front(end);
                start_id = WordId(start_id.0 + 1);
                id
            }
        };
        (start_id, end_id)
    }

    /// Look up the id of a normalized word.
    #[inline]
    pub fn id(&self, word: &str) -> Option<WordId> {
        self.ids.get(word).copied()
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.ids.contains_key(word)
    }

    /// The word for an id issued by this dictionary.
    #[inline]
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id.index()]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(id, word)` pairs in dictionary order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (WordId(i as u32), w.as_str()))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}
