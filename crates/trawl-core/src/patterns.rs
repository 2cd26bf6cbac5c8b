//! Multi-pattern aggregation.
//!
//! A [`PatternSet`] combines the results of evaluating each of its patterns
//! independently. Negative patterns take precedence: a path is accepted only
//! if at least one non-negated pattern matches it and no negated pattern
//! rejects it.

use crate::error::Result;
use crate::pattern::{Pattern, Status};
use crate::walk;
use std::path::{Path, PathBuf};

/// An ordered set of [`Pattern`] values matched as a unit.
///
/// # Example
/// ```
/// use trawl_core::PatternSet;
///
/// let set = PatternSet::new(["src/**", "!src/generated/**"]);
/// assert!(set.matches("src/lib.rs"));
/// assert!(!set.matches("src/generated/api.rs"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet(Vec<Pattern>);

impl PatternSet {
    /// Create a pattern set from a list of pattern strings.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Pattern>,
    {
        PatternSet(patterns.into_iter().map(Into::into).collect())
    }

    /// Whether the set as a whole matches the given path.
    ///
    /// Every pattern is evaluated. A pattern that fails to evaluate (for
    /// example a malformed character class) makes the whole result `false`:
    /// a broken pattern excludes rather than includes. A rejection by any
    /// negated pattern is final. Otherwise the path matches if some
    /// non-negated pattern matched it — a set with only negations accepts
    /// nothing.
    pub fn matches(&self, path: &str) -> bool {
        let mut matched = false;
        for pattern in &self.0 {
            match pattern.evaluate(path) {
                Err(_) | Ok(Status::Rejected) => return false,
                Ok(Status::Matched) => matched = true,
                Ok(Status::Unmatched) => {}
            }
        }
        matched
    }

    /// Return the subsequence of `names` the set matches, preserving input
    /// order.
    pub fn filter<I, S>(&self, names: I) -> Vec<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter(|name| self.matches(name.as_ref()))
            .collect()
    }

    /// Walk the tree rooted at `base` once and collect every path the set
    /// matches after `base` has been prepended to each pattern.
    ///
    /// Entries the walk cannot read are skipped. Result order is
    /// unspecified.
    pub fn glob(&self, base: impl AsRef<Path>) -> Vec<PathBuf> {
        let base = base.as_ref();
        let patterns = self.prepend(base);
        walk::visit(base)
            .filter(|path| patterns.matches(&path.to_string_lossy()))
            .collect()
    }

    /// Resolve every pattern against the current working directory.
    ///
    /// The first pattern that fails to resolve aborts with its error; no
    /// partial set is returned.
    pub fn abs(&self) -> Result<PatternSet> {
        self.0.iter().map(Pattern::abs).collect()
    }

    /// Join `base` onto every pattern that is not already absolute.
    pub fn prepend(&self, base: impl AsRef<Path>) -> PatternSet {
        let base = base.as_ref();
        self.0.iter().map(|pattern| pattern.prepend(base)).collect()
    }

    /// Iterate over the patterns in order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.0.iter()
    }

    /// Number of patterns in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set contains no patterns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Pattern> for PatternSet {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        PatternSet(iter.into_iter().collect())
    }
}

impl From<Vec<Pattern>> for PatternSet {
    fn from(patterns: Vec<Pattern>) -> Self {
        PatternSet(patterns)
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_single_pattern_behaves_like_pattern() {
        assert!(PatternSet::new(["foo"]).matches("foo"));
        assert!(!PatternSet::new(["foo"]).matches("bar"));
        assert!(PatternSet::new(["foo/*.proto"]).matches("foo/bar.proto"));
        assert!(!PatternSet::new(["foo/*"]).matches("foo/bar/baz"));
        assert!(PatternSet::new(["foo/**/baz"]).matches("foo/bar-1/bar-2/baz"));
        assert!(PatternSet::new(["foo/**/baz"]).matches("foo/baz"));
        assert!(!PatternSet::new(["foo/**/baz"]).matches("foo/bar"));
    }

    #[test]
    fn test_negation_dominates() {
        let set = PatternSet::new(["*", "!foo"]);
        assert!(!set.matches("foo"));
        assert!(set.matches("bar"));

        // Order does not change the outcome.
        let set = PatternSet::new(["!foo", "*"]);
        assert!(!set.matches("foo"));
        assert!(set.matches("bar"));
    }

    #[test]
    fn test_only_negations_match_nothing() {
        let set = PatternSet::new(["!foo"]);
        assert!(!set.matches("foo"));
        assert!(!set.matches("bar"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        assert!(!PatternSet::default().matches("foo"));
    }

    #[test]
    fn test_malformed_pattern_fails_closed() {
        assert!(!PatternSet::new(["["]).matches("foo"));
        assert!(!PatternSet::new(["foo/**/["]).matches("foo/bar/baz"));
        assert!(!PatternSet::new(["!["]).matches("foo"));
        // Even alongside a pattern that would match on its own.
        assert!(!PatternSet::new(["foo", "["]).matches("foo"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let set = PatternSet::new(["foo*"]);
        assert_eq!(
            set.filter(["foo", "foobar", "bar", "baz"]),
            vec!["foo", "foobar"]
        );

        let set = PatternSet::new(["foo/**", "!foo/bar"]);
        assert_eq!(
            set.filter(["foo", "foo/bar", "foo/bar/baz", "bar"]),
            vec!["foo", "foo/bar/baz"]
        );
    }

    #[test]
    fn test_glob_with_negation() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        fs::create_dir_all(base.join("foo/bar/baz")).unwrap();
        fs::write(base.join("foo/qux.txt"), b"qux").unwrap();

        let set = PatternSet::new(["foo/**", "!foo/bar"]);
        let mut got = set.glob(base);
        got.sort();

        // The negation removes exactly `foo/bar`; descendants stay.
        assert_eq!(
            got,
            vec![
                base.join("foo"),
                base.join("foo/bar/baz"),
                base.join("foo/qux.txt"),
            ]
        );
    }

    #[test]
    fn test_abs_and_prepend_elementwise() {
        let set = PatternSet::new(["foo/**", "!foo/bar", "/abs"]);

        let prepended = set.prepend("base");
        let texts: Vec<_> = prepended.iter().map(Pattern::as_str).collect();
        assert_eq!(texts, vec!["base/foo/**", "!base/foo/bar", "/abs"]);

        let resolved = set.abs().unwrap();
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved.prepend("anywhere"), resolved);
    }

    #[test]
    fn test_collect_from_patterns() {
        let set: PatternSet = ["a", "!b"].into_iter().map(Pattern::new).collect();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert!(set.matches("a"));
        assert!(!set.matches("b"));
    }
}
