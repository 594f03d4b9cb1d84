// Prefix index: every prefix of every dictionary word -> words carrying it.
//
// Looking up a suffix of the current word yields every word that can follow
// it at exactly that overlap, so expanding a search node never scans the
// whole dictionary.

use hashbrown::HashMap;

use crate::dictionary::{Dictionary, WordId};

/// Mapping from prefix strings to the dictionary words that start with them.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    entries: HashMap<Box<str>, Vec<WordId>>,
    min_prefix_len: usize,
}

impl PrefixIndex {
    /// Index every prefix of length `min_prefix_len..=word.len()` of every word.
    ///
    /// Words are registered in dictionary order, so each lookup result is in
    /// dictionary order too. A `min_prefix_len` of 0 is treated as 1.
    pub fn build(dictionary: &Dictionary, min_prefix_len: usize) -> Self {
        let min_prefix_len = min_prefix_len.max(1);
        let mut entries: HashMap<Box<str>, Vec<WordId>> = HashMap::new();

        for (id, word) in dictionary.iter() {
            for len in min_prefix_len..=word.len() {
                let prefix = &word[..len];
                match entries.get_mut(prefix) {
                    Some(ids) => ids.push(id),
                    None => {
                        entries.insert(prefix.into(), vec![id]);
                    }
                }
            }
        }

        Self {
            entries,
            min_prefix_len,
        }
    }

    /// All words starting with `prefix`, in dictionary order.
    ///
    /// Prefixes shorter than the indexed minimum are never registered and
    /// return an empty slice.
    #[inline]
    pub fn lookup(&self, prefix: &str) -> &[WordId] {
        self.entries.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Shortest prefix length registered in the index.
    pub fn min_prefix_len(&self) -> usize {
        self.min_prefix_len
    }

    /// Number of distinct prefixes.
    pub fn prefix_count(&self) -> usize {
        self.entries.len()
    }
}
