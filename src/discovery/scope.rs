use crate::error::DiscoveryError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, Walk, WalkBuilder};
use std::fs;
use std::path::Path;

/// Entries without `*` or `?` are plain directory names and match literally
fn ignore_glob(entry: &str) -> String {
    if entry.contains(['*', '?']) {
        entry.to_string()
    } else {
        globset::escape(entry)
    }
}

/// Build a matcher for ignored directory names
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet, DiscoveryError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(&ignore_glob(pattern)).map_err(|e| DiscoveryError::GlobPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| DiscoveryError::GlobPattern {
        pattern: "ignore set".to_string(),
        source: e,
    })
}

fn is_ignored_dir(entry: &DirEntry, ignore_set: &GlobSet) -> bool {
    // never prune the root itself
    if entry.depth() == 0 {
        return false;
    }
    let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
    is_dir && ignore_set.is_match(entry.file_name())
}

/// Regular files, and symlinks that resolve to one. Symlinked directories
/// are not descended.
pub fn is_scannable_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(t) if t.is_file() => true,
        Some(t) if t.is_symlink() => fs::metadata(entry.path()).is_ok_and(|m| m.is_file()),
        _ => false,
    }
}

/// Walk every file under `root`, pruning ignored directories
pub fn walk_tree(root: &Path, ignore_set: GlobSet) -> Walk {
    WalkBuilder::new(root)
        .standard_filters(false) // visit hidden and gitignored files too
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| !is_ignored_dir(entry, &ignore_set))
        .build()
}
