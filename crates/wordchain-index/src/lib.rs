//! Search universe for word-chain solving.
//!
//! A raw word list is normalized, deduplicated and length-filtered into a
//! [`Dictionary`] of interned words, which a [`PrefixIndex`] then maps from
//! every prefix to the words carrying it. Both are built once per solve and
//! are read-only afterwards.
//!
//! - [`dictionary`] -- Dictionary filter and word interning
//! - [`prefix`] -- Prefix-to-words lookup table

pub mod dictionary;
pub mod prefix;

pub use dictionary::{Dictionary, WordId, filter_words};
pub use prefix::PrefixIndex;
