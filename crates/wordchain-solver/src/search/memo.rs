// Best fused length seen per (word, depth).

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use wordchain_index::WordId;

/// Remembers the smallest fused length with which each word was reached at
/// each depth. A later route to the same (word, depth) is only worth
/// exploring if it is strictly shorter.
#[derive(Debug, Default)]
pub struct DepthMemo {
    best: HashMap<(WordId, usize), usize>,
}

impl DepthMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a route reaching `word` at `depth` with `fused` characters.
    ///
    /// Returns `true` (and records the route) if it is the first arrival or
    /// strictly improves on the best fused length so far; `false` otherwise.
    pub fn offer(&mut self, word: WordId, depth: usize, fused: usize) -> bool {
        match self.best.entry((word, depth)) {
            Entry::Occupied(mut entry) => {
                if *entry.get() <= fused {
                    return false;
                }
                entry.insert(fused);
                true
            }
            Entry::Vacant(entry) => {
                entry.insert(fused);
                true
            }
        }
    }

    /// Best fused length recorded for `word` at `depth`.
    pub fn best(&self, word: WordId, depth: usize) -> Option<usize> {
        self.best.get(&(word, depth)).copied()
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
