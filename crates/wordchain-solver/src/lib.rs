//! Word-chain solving engine.
//!
//! Given a start word, an end word and a dictionary, [`solve()`] finds a chain
//! of dictionary words in which every consecutive pair overlaps (a suffix of
//! one word is a prefix of the next). Chains are ranked by number of links
//! first and by fused character count second. [`is_valid_move`] checks a
//! single proposed link for interactive play.
//!
//! Every call builds its own dictionary, prefix index and search state; no
//! state survives between calls.
//!
//! # Architecture
//!
//! - [`mod@overlap`] -- Longest suffix/prefix overlap between two words
//! - [`search`] -- Breadth-first chain search over the overlap graph
//! - [`materialize`] -- Path reconstruction into a [`Solution`]
//! - [`mod@solve`] -- Top-level solve entry point and its error type
//! - [`validate`] -- Single-move validation
//! - [`game`] -- Interactive play session built on move validation
//! - [`daily`] -- Deterministic daily start/target selection
//! - [`handle`] -- Owned dictionary + options facade over all of the above

pub mod daily;
pub mod game;
pub mod handle;
pub mod materialize;
pub mod overlap;
pub mod search;
pub mod solve;
pub mod validate;

pub use daily::{DailyPair, daily_pair};
pub use game::ChainGame;
pub use handle::WordChain;
pub use overlap::overlap;
pub use solve::{SolveError, solve};
pub use validate::{is_valid_move, validate_move};

pub use wordchain_core::chain::{ChainLink, Segment, Solution, fuse, fused_length, fused_segments};
pub use wordchain_core::options::{ChainOptions, OptionsError};
pub use wordchain_core::validation::{MoveRejection, MoveValidation};
pub use wordchain_core::word::normalize_word;
