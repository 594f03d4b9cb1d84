// Search nodes and the arena that owns them.
//
// Nodes form a forest rooted at the start node; each node points to its
// predecessor by arena index. Every node owns its own copy of the words used
// along its chain, so sibling branches never observe each other's choices.

use hashbrown::HashSet;
use wordchain_index::WordId;

/// Index of a node within a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One partial chain ending at `word`.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub word: WordId,
    /// Number of links from the start word.
    pub depth: usize,
    /// Fused character count of the chain ending here.
    pub fused: usize,
    pub parent: Option<NodeId>,
    /// Overlap with the parent's word (0 for the root).
    pub overlap: usize,
    /// Words already on this chain, including `word`.
    pub used: HashSet<WordId>,
}

impl SearchNode {
    pub fn root(word: WordId, word_len: usize) -> Self {
        let mut used = HashSet::new();
        used.insert(word);
        Self {
            word,
            depth: 0,
            fused: word_len,
            parent: None,
            overlap: 0,
            used,
        }
    }

    /// Fused length after appending a word of `word_len` characters at `overlap`.
    #[inline]
    pub fn extended_fused(&self, word_len: usize, overlap: usize) -> usize {
        self.fused + word_len.saturating_sub(overlap)
    }

    /// Build the node for appending `word` to this chain.
    ///
    /// `id` must be this node's own id; `fused` comes from [`extended_fused`](Self::extended_fused).
    pub fn child(&self, id: NodeId, word: WordId, overlap: usize, fused: usize) -> Self {
        let mut used = self.used.clone();
        used.insert(word);
        Self {
            word,
            depth: self.depth + 1,
            fused,
            parent: Some(id),
            overlap,
            used,
        }
    }
}

/// Append-only storage for every node created during one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk from `id` back to the root, yielding `id`'s node first.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> {
        std::iter::successors(Some(self.get(id)), move |node| {
            node.parent.map(|parent| self.get(parent))
        })
    }
}
