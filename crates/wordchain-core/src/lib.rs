//! Shared types for word-chain solving.
//!
//! - [`word`] -- Canonical word form (Latin letters only, uppercase)
//! - [`options`] -- Solver and validator options
//! - [`chain`] -- Chain links, solutions, and fused-length materialization
//! - [`validation`] -- Result of checking a single proposed move

pub mod chain;
pub mod options;
pub mod validation;
pub mod word;
