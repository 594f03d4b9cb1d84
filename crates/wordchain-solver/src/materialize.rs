// Turn a search node back into an ordered chain.

use wordchain_core::chain::{ChainLink, Solution};
use wordchain_index::Dictionary;

use crate::search::{NodeArena, NodeId};

/// Rebuild the chain ending at `id` by following parent links to the root.
pub fn materialize(arena: &NodeArena, id: NodeId, dictionary: &Dictionary) -> Solution {
    let mut chain: Vec<ChainLink> = arena
        .ancestry(id)
        .map(|node| ChainLink::new(dictionary.word(node.word), node.overlap))
        .collect();
    chain.reverse();

    let solution = Solution::from_chain(chain);
    debug_assert_eq!(solution.characters, arena.get(id).fused);
    debug_assert_eq!(solution.steps, arena.get(id).depth);
    solution
}
