//! Directory tree traversal used by the glob operations.
//!
//! A thin wrapper over `walkdir` that yields every file and directory under
//! a base path, the base itself included. Per-entry errors (unreadable
//! directories, broken symlinks) are skipped rather than aborting the walk:
//! matching is a filter, and an entry we cannot read is an entry that does
//! not match.

use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Visit every path under `base` depth-first, skipping entries that error.
///
/// Traversal order is unspecified; callers that need a stable order sort the
/// collected results.
pub(crate) fn visit(base: &Path) -> impl Iterator<Item = PathBuf> {
    debug!(base = %base.display(), "walking directory tree");
    WalkDir::new(base)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.into_path()),
            Err(err) => {
                trace!(error = %err, "skipping unreadable entry");
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_visit_yields_base_files_and_dirs() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        fs::create_dir_all(base.join("a/b")).unwrap();
        fs::write(base.join("a/b/c.txt"), b"c").unwrap();

        let mut paths: Vec<_> = visit(base).collect();
        paths.sort();

        assert_eq!(
            paths,
            vec![
                base.to_path_buf(),
                base.join("a"),
                base.join("a/b"),
                base.join("a/b/c.txt"),
            ]
        );
    }

    #[test]
    fn test_visit_missing_base_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        assert_eq!(visit(&missing).count(), 0);
    }
}
