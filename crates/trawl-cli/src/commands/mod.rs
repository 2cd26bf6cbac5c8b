//! CLI command implementations.

pub mod filter;
pub mod find;
pub mod matches;
