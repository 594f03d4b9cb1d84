// Chain search engine: breadth-first search over the overlap graph.
//
// Nodes are expanded in strict FIFO order, so every node at depth d is
// expanded before any node at depth d + 1 and the first time the end word is
// dequeued it is at the minimum depth. From then on nothing is expanded; the
// end-word nodes still queued at that same depth compete on fused length
// alone, and the first of equally short ones is kept.
//
// Expanding a node looks up every suffix of its word (longest first, down to
// the minimum overlap) in the prefix index. A candidate is enqueued only if
// it is not already on the node's chain (unless reuse is allowed) and it
// reaches its (word, depth) with a strictly smaller fused length than any
// earlier route.
//
// Depth is bounded by the dictionary size even without a step cap: a
// shortest chain never visits a word twice, so it has at most one link per
// word. With reuse allowed this bound is what makes the search finish when
// the end word is unreachable through a cycle.

mod memo;
mod node;

pub use memo::DepthMemo;
pub use node::{NodeArena, NodeId, SearchNode};

use std::collections::VecDeque;

use wordchain_core::chain::Solution;
use wordchain_core::options::ChainOptions;
use wordchain_index::{Dictionary, PrefixIndex, WordId};

use crate::materialize::materialize;

/// Counters describing the work done by one search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose neighbours were enumerated.
    pub expanded: usize,
    /// Nodes added to the queue, including the root.
    pub enqueued: usize,
    /// Candidates dropped by the (word, depth) memo.
    pub pruned: usize,
    /// Candidates dropped because they were already on the chain.
    pub reused: usize,
}

/// Result of one search: every node created plus the best end-word node, if any.
#[derive(Debug)]
pub struct SearchOutcome {
    arena: NodeArena,
    best: Option<NodeId>,
    stats: SearchStats,
}

impl SearchOutcome {
    /// The selected end-word node.
    pub fn best(&self) -> Option<&SearchNode> {
        self.best.map(|id| self.arena.get(id))
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Reconstruct the selected chain, or `None` if the end word was never reached.
    pub fn to_solution(&self, dictionary: &Dictionary) -> Option<Solution> {
        self.best
            .map(|id| materialize(&self.arena, id, dictionary))
    }
}

/// Mutable state of a running search.
#[derive(Default)]
struct Frontier {
    arena: NodeArena,
    queue: VecDeque<NodeId>,
    memo: DepthMemo,
    stats: SearchStats,
}

impl Frontier {
    fn enqueue(&mut self, node: SearchNode) {
        let id = self.arena.push(node);
        self.queue.push_back(id);
        self.stats.enqueued += 1;
    }
}

/// Breadth-first chain search over a prepared dictionary and prefix index.
pub struct ChainSearch<'a> {
    dictionary: &'a Dictionary,
    index: &'a PrefixIndex,
    options: &'a ChainOptions,
}

impl<'a> ChainSearch<'a> {
    /// `index` must have been built from `dictionary`.
    pub fn new(dictionary: &'a Dictionary, index: &'a PrefixIndex, options: &'a ChainOptions) -> Self {
        Self {
            dictionary,
            index,
            options,
        }
    }

    /// Search for the best chain from `start` to `end`.
    pub fn run(&self, start: WordId, end: WordId) -> SearchOutcome {
        let mut frontier = Frontier::default();
        frontier.enqueue(SearchNode::root(start, self.dictionary.word(start).len()));

        let depth_limit = self.depth_limit();
        let mut best: Option<NodeId> = None;
        let mut best_depth: Option<usize> = None;

        while let Some(id) = frontier.queue.pop_front() {
            let node = frontier.arena.get(id);

            if let Some(depth) = best_depth {
                if node.depth >= depth {
                    if node.depth == depth && node.word == end {
                        let improves = best
                            .is_none_or(|b| node.fused < frontier.arena.get(b).fused);
                        if improves {
                            best = Some(id);
                        }
                    }
                    continue;
                }
            }

            if node.word == end {
                best = Some(id);
                best_depth = Some(node.depth);
                continue;
            }

            if node.depth >= depth_limit {
                continue;
            }

            self.expand(id, &mut frontier);
        }

        let stats = frontier.stats;
        log::debug!(
            "chain search {} -> {}: best depth {:?}, {} expanded, {} enqueued, {} pruned, {} reused",
            self.dictionary.word(start),
            self.dictionary.word(end),
            best_depth,
            stats.expanded,
            stats.enqueued,
            stats.pruned,
            stats.reused,
        );

        SearchOutcome {
            arena: frontier.arena,
            best,
            stats,
        }
    }

    /// Deepest node that may still be expanded: `max_steps`, but never more
    /// than one link per dictionary word.
    fn depth_limit(&self) -> usize {
        let longest = self.dictionary.len().saturating_sub(1);
        self.options.max_steps.map_or(longest, |max| max.min(longest))
    }

    fn expand(&self, id: NodeId, frontier: &mut Frontier) {
        frontier.stats.expanded += 1;

        let node = frontier.arena.get(id);
        let (word_id, depth) = (node.word, node.depth);
        let word = self.dictionary.word(word_id);
        log::trace!("expand {word} at depth {depth} (fused {})", node.fused);

        let min_overlap = self.options.effective_min_overlap();
        for overlap in (min_overlap..word.len()).rev() {
            let suffix = &word[word.len() - overlap..];
            for &candidate in self.index.lookup(suffix) {
                let node = frontier.arena.get(id);
                if !self.options.allow_reuse && node.used.contains(&candidate) {
                    frontier.stats.reused += 1;
                    continue;
                }

                let fused = node.extended_fused(self.dictionary.word(candidate).len(), overlap);
                if !frontier.memo.offer(candidate, depth + 1, fused) {
                    frontier.stats.pruned += 1;
                    continue;
                }

                let child = frontier.arena.get(id).child(id, candidate, overlap, fused);
                frontier.enqueue(child);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        dictionary: Dictionary,
        index: PrefixIndex,
        options: ChainOptions,
    }

    impl Fixture {
        fn new(words: &[&str], options: ChainOptions) -> Self {
            let dictionary = Dictionary::from_raw(words.iter().copied(), &options);
            let index = PrefixIndex::build(&dictionary, options.effective_min_overlap());
            Self {
                dictionary,
                index,
                options,
            }
        }

        fn run(&self, start: &str, end: &str) -> SearchOutcome {
            let search = ChainSearch::new(&self.dictionary, &self.index, &self.options);
            search.run(
                self.dictionary.id(start).unwrap(),
                self.dictionary.id(end).unwrap(),
            )
        }

        fn solve(&self, start: &str, end: &str) -> Option<Solution> {
            self.run(start, end).to_solution(&self.dictionary)
        }
    }

    fn words(solution: &Solution) -> Vec<&str> {
        solution.words().collect()
    }

    #[test]
    fn start_equal_to_end_is_immediate() {
        let f = Fixture::new(&["SAME", "AMEN"], ChainOptions::default());
        let outcome = f.run("SAME", "SAME");
        assert_eq!(outcome.stats().expanded, 0);
        let s = outcome.to_solution(&f.dictionary).unwrap();
        assert_eq!(s.steps, 0);
        assert_eq!(s.characters, 4);
    }

    #[test]
    fn finds_multi_step_chain() {
        let f = Fixture::new(&["STONE", "ONEWAY", "WAYLAND", "LAND"], ChainOptions::default());
        let s = f.solve("STONE", "LAND").unwrap();
        assert_eq!(words(&s), ["STONE", "ONEWAY", "WAYLAND", "LAND"]);
        let overlaps: Vec<usize> = s.chain.iter().map(|l| l.overlap).collect();
        assert_eq!(overlaps, [0, 3, 3, 4]);
        assert_eq!(s.steps, 3);
        assert_eq!(s.characters, 12);
    }

    #[test]
    fn unreachable_end_has_no_best() {
        let f = Fixture::new(&["AAAA", "ZZZZ"], ChainOptions::default());
        let outcome = f.run("AAAA", "ZZZZ");
        assert!(outcome.best().is_none());
        assert!(outcome.to_solution(&f.dictionary).is_none());
    }

    #[test]
    fn later_route_with_fewer_characters_wins() {
        // ABCD -> BCDXEF -> EFGH is discovered first (9 characters);
        // ABCD -> CDEF -> EFGH has the same number of links and 8 characters.
        let f = Fixture::new(&["ABCD", "EFGH", "BCDXEF", "CDEF"], ChainOptions::default());
        let s = f.solve("ABCD", "EFGH").unwrap();
        assert_eq!(words(&s), ["ABCD", "CDEF", "EFGH"]);
        assert_eq!(s.characters, 8);
    }

    #[test]
    fn first_discovered_wins_ties() {
        // Both middle words give 8 characters; CDEFG comes first in the index.
        let f = Fixture::new(&["ABCD", "EFGH", "CDEFG", "CDEF"], ChainOptions::default());
        let outcome = f.run("ABCD", "EFGH");
        assert_eq!(outcome.stats().pruned, 1);
        let s = outcome.to_solution(&f.dictionary).unwrap();
        assert_eq!(words(&s), ["ABCD", "CDEFG", "EFGH"]);
        assert_eq!(s.characters, 8);
    }

    #[test]
    fn fewest_links_are_found() {
        // ABCD -> CDPP -> PPXY -> XYZW also reaches the end, one link later.
        let f = Fixture::new(
            &["ABCD", "XYZW", "CDXY", "CDPP", "PPXY"],
            ChainOptions::default(),
        );
        let s = f.solve("ABCD", "XYZW").unwrap();
        assert_eq!(s.steps, 2);
        assert_eq!(words(&s), ["ABCD", "CDXY", "XYZW"]);
        assert_eq!(s.characters, 8);
    }

    #[test]
    fn depth_cap_stops_expansion() {
        let mut options = ChainOptions::default();
        let f = Fixture::new(&["STONE", "ONEWAY", "WAYLAND", "LAND"], options);
        assert!(f.solve("STONE", "LAND").is_some());

        options.max_steps = Some(2);
        let f = Fixture::new(&["STONE", "ONEWAY", "WAYLAND", "LAND"], options);
        assert!(f.solve("STONE", "LAND").is_none());

        options.max_steps = Some(3);
        let f = Fixture::new(&["STONE", "ONEWAY", "WAYLAND", "LAND"], options);
        assert_eq!(f.solve("STONE", "LAND").map(|s| s.steps), Some(3));
    }

    #[test]
    fn used_words_are_skipped() {
        // ABAB overlaps itself ("AB"), which must not be taken as a link.
        let f = Fixture::new(&["ABAB", "ABXY", "XYZ"], ChainOptions::default());
        let outcome = f.run("ABAB", "XYZ");
        assert!(outcome.stats().reused > 0);
        let s = outcome.to_solution(&f.dictionary).unwrap();
        assert_eq!(words(&s), ["ABAB", "ABXY", "XYZ"]);
    }

    #[test]
    fn reuse_allowed_keeps_shortest_chain() {
        let options = ChainOptions {
            allow_reuse: true,
            ..ChainOptions::default()
        };
        let f = Fixture::new(&["ABAB", "ABXY", "XYZ"], options);
        let outcome = f.run("ABAB", "XYZ");
        assert_eq!(outcome.stats().reused, 0);
        let s = outcome.to_solution(&f.dictionary).unwrap();
        assert_eq!(words(&s), ["ABAB", "ABXY", "XYZ"]);
    }

    #[test]
    fn reuse_without_cap_terminates_on_cycle() {
        // ABAB and BABA link to each other and to themselves forever.
        let options = ChainOptions {
            allow_reuse: true,
            max_steps: None,
            ..ChainOptions::default()
        };
        let f = Fixture::new(&["ABAB", "BABA", "ZZZZ"], options);
        let outcome = f.run("ABAB", "ZZZZ");
        assert!(outcome.best().is_none());
        assert_eq!(outcome.arena().len(), 5);
        assert_eq!(outcome.stats().expanded, 3);
    }

    #[test]
    fn depth_limit_follows_dictionary_size() {
        let f = Fixture::new(&["ABC", "BCD", "CDE"], ChainOptions::default());
        let search = ChainSearch::new(&f.dictionary, &f.index, &f.options);
        assert_eq!(search.depth_limit(), 2);

        let options = ChainOptions {
            max_steps: Some(1),
            ..ChainOptions::default()
        };
        let search = ChainSearch::new(&f.dictionary, &f.index, &options);
        assert_eq!(search.depth_limit(), 1);

        let options = ChainOptions {
            max_steps: Some(10),
            ..ChainOptions::default()
        };
        let search = ChainSearch::new(&f.dictionary, &f.index, &options);
        assert_eq!(search.depth_limit(), 2);
    }

    #[test]
    fn search_is_deterministic() {
        let f = Fixture::new(
            &["ABCD", "EFGH", "BCDXEF", "CDEF", "CDEFG", "DEFGH"],
            ChainOptions::default(),
        );
        let first = f.solve("ABCD", "EFGH");
        for _ in 0..5 {
            assert_eq!(f.solve("ABCD", "EFGH"), first);
        }
    }
}
