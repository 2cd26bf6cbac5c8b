//! # Trawl Core Library
//!
//! This crate provides the pattern matching engine for the Trawl path
//! globbing tool. It extends conventional shell globbing with two things:
//! `**` segments that match any number of directory levels, and `!`
//! prefixes that negate a pattern into an exclusion.
//!
//! ## Architecture
//!
//! - **Pattern** (`pattern`): one glob expression matched against one path
//! - **PatternSet** (`patterns`): an ordered set of patterns combined with
//!   negation precedence, plus bulk filter/walk operations
//! - **Config** (`config`): configuration management
//! - **Errors** (`error`): the crate error type
//!
//! Single-segment wildcard semantics (`*`, `?`, `[...]`) come from the
//! `glob` crate; directory traversal comes from `walkdir`. Values are
//! immutable after construction, so sharing them across threads needs no
//! synchronization.
//!
//! ## Example
//!
//! ```rust
//! use trawl_core::PatternSet;
//!
//! let set = PatternSet::new(["docs/**", "!docs/internal/**"]);
//! assert!(set.matches("docs/guide.md"));
//! assert!(!set.matches("docs/internal/notes.md"));
//! ```

pub mod config;
pub mod error;
pub mod pattern;
pub mod patterns;

mod walk;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TrawlError};
pub use pattern::Pattern;
pub use patterns::PatternSet;
