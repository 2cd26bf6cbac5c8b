//! Single-pattern matching.
//!
//! A [`Pattern`] is one glob expression matched against one path. On top of
//! the usual single-segment wildcards (`*`, `?`, `[...]`, delegated to the
//! `glob` crate) it supports:
//!
//! - `**` as a whole segment, matching zero or more path segments
//! - a leading `!` that inverts the match into an exclusion
//!
//! The pattern text is the sole source of truth: nothing is precompiled, so
//! two patterns with the same text always match identically. Matching is
//! total — a malformed segment such as an unclosed character class is
//! reported as a non-match, never as an error or a panic.

use crate::error::{Result, TrawlError};
use crate::walk;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// A globbing pattern matched against filesystem paths.
///
/// Unlike [`glob::Pattern`], this matches segment-by-segment against the
/// platform path separator, supports `**` for spanning directory levels,
/// and `!` for negating the match.
///
/// `**` only has its recursive meaning as a complete segment. Embedded in
/// a segment (`a**`) it is rejected by the segment primitive, so such a
/// pattern matches nothing.
///
/// # Example
/// ```
/// use trawl_core::Pattern;
///
/// let pattern = Pattern::new("src/**/*.rs");
/// assert!(pattern.matches("src/lib.rs"));
/// assert!(pattern.matches("src/commands/find.rs"));
/// assert!(!pattern.matches("tests/lib.rs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(String);

impl Pattern {
    /// Create a pattern from its literal text.
    pub fn new(text: impl Into<String>) -> Self {
        Pattern(text.into())
    }

    /// The literal pattern text, unchanged.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this pattern matches the given path.
    ///
    /// Negated patterns report `false` for paths they reject; the
    /// distinction between "rejected" and "did not match" only becomes
    /// observable when patterns are combined in a
    /// [`PatternSet`](crate::PatternSet).
    pub fn matches(&self, path: &str) -> bool {
        matches!(self.evaluate(path), Ok(Status::Matched))
    }

    /// Return the subsequence of `paths` this pattern matches, preserving
    /// input order.
    pub fn filter<I, S>(&self, paths: I) -> Vec<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .filter(|path| self.matches(path.as_ref()))
            .collect()
    }

    /// Walk the tree rooted at `base` and collect every path (files and
    /// directories, `base` itself included) that this pattern matches once
    /// `base` has been prepended to it.
    ///
    /// Entries the walk cannot read are skipped. Result order is
    /// unspecified.
    pub fn glob(&self, base: impl AsRef<Path>) -> Vec<PathBuf> {
        let base = base.as_ref();
        let pattern = self.prepend(base);
        walk::visit(base)
            .filter(|path| pattern.matches(&path.to_string_lossy()))
            .collect()
    }

    /// Resolve this pattern against the current working directory.
    ///
    /// Already-absolute patterns are returned unchanged. Any leading `!`
    /// markers are carried over so the pattern keeps its meaning.
    ///
    /// This is the only operation on a pattern that can fail: the working
    /// directory may be unavailable, and callers need to see that.
    pub fn abs(&self) -> Result<Pattern> {
        let (prefix, stripped) = self.split_negation();
        if Path::new(stripped).is_absolute() {
            return Ok(self.clone());
        }
        let cwd = env::current_dir().map_err(|source| TrawlError::AbsoluteResolution {
            pattern: self.0.clone(),
            source,
        })?;
        Ok(Pattern(format!("{prefix}{}", cwd.join(stripped).display())))
    }

    /// Join `base` onto this pattern, unless it is already absolute. Any
    /// leading `!` markers are carried over so the pattern keeps its
    /// meaning.
    pub fn prepend(&self, base: impl AsRef<Path>) -> Pattern {
        let (prefix, stripped) = self.split_negation();
        if Path::new(stripped).is_absolute() {
            return self.clone();
        }
        Pattern(format!(
            "{prefix}{}",
            base.as_ref().join(stripped).display()
        ))
    }

    /// Evaluate this pattern against a path, distinguishing an explicit
    /// rejection by a negated pattern from an ordinary non-match.
    pub(crate) fn evaluate(&self, path: &str) -> std::result::Result<Status, glob::PatternError> {
        evaluate(&self.0, path)
    }

    /// Split the text into its leading `!` markers and the rest.
    fn split_negation(&self) -> (&str, &str) {
        let stripped = self.0.trim_start_matches('!');
        let offset = self.0.len() - stripped.len();
        (&self.0[..offset], stripped)
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::new(text)
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Pattern::new(text)
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of evaluating one pattern against one path.
///
/// `Rejected` dominates when results are combined across a set, which is
/// why this is a three-valued status rather than a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Matched,
    Rejected,
    Unmatched,
}

fn evaluate(pattern: &str, path: &str) -> std::result::Result<Status, glob::PatternError> {
    if let Some(inverted) = pattern.strip_prefix('!') {
        // A match of the stripped pattern becomes a rejection; rejections
        // and non-matches pass through, so `!!p` behaves like `!p`.
        return match evaluate(inverted, path)? {
            Status::Matched => Ok(Status::Rejected),
            status => Ok(status),
        };
    }
    let pattern_segments: Vec<&str> = pattern.split(MAIN_SEPARATOR).collect();
    let path_segments: Vec<&str> = path.split(MAIN_SEPARATOR).collect();
    if match_segments(&pattern_segments, &path_segments)? {
        Ok(Status::Matched)
    } else {
        Ok(Status::Unmatched)
    }
}

/// Recursive segment-wise matcher.
///
/// Non-`**` segments consume exactly one path segment via the
/// single-segment primitive. A `**` segment first tries to consume zero
/// path segments, then retries itself one segment further down the path.
/// The pattern and path must otherwise be exhausted together.
fn match_segments(pattern: &[&str], path: &[&str]) -> std::result::Result<bool, glob::PatternError> {
    let mut path_idx = 0;
    for (idx, &segment) in pattern.iter().enumerate() {
        if segment == "**" {
            if match_segments(&pattern[idx + 1..], &path[path_idx..])? {
                return Ok(true);
            }
            if path_idx < path.len() && match_segments(&pattern[idx..], &path[path_idx + 1..])? {
                return Ok(true);
            }
            return Ok(false);
        }
        if path_idx >= path.len() {
            return Ok(false);
        }
        if !glob::Pattern::new(segment)?.matches(path[path_idx]) {
            return Ok(false);
        }
        path_idx += 1;
    }
    Ok(path_idx == path.len())
}
