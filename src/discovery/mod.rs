mod files;
mod scope;

pub use files::{relative_path, scan_file};
pub use scope::{build_ignore_set, is_scannable_file, walk_tree};

use crate::config::ScanOptions;
use crate::error::DiscoveryError;
use crate::scoring::{self, Level, ScoredAnnotation};
use std::fs;
use tracing::{debug, info, warn};

/// Validate that the scan root exists and is a directory
pub fn check_root(options: &ScanOptions) -> Result<(), DiscoveryError> {
    let meta = fs::metadata(&options.root).map_err(|e| DiscoveryError::RootNotFound {
        path: options.root.clone(),
        source: e,
    })?;
    if !meta.is_dir() {
        return Err(DiscoveryError::NotADirectory(options.root.clone()));
    }
    Ok(())
}

/// Walk the tree, parse and score every marker line, and keep those
/// matching the selected tags and minimum score
pub fn collect(options: &ScanOptions) -> Result<Vec<ScoredAnnotation>, DiscoveryError> {
    check_root(options)?;
    let ignore_set = build_ignore_set(&options.ignore)?;

    info!("Scanning {:?}", options.root);

    let mut results = Vec::new();
    let mut files_scanned = 0usize;
    let mut below_threshold = 0usize;

    for entry in walk_tree(&options.root, ignore_set) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unwalkable entry: {}", e);
                continue;
            }
        };
        if !is_scannable_file(&entry) {
            continue;
        }

        let rel_path = relative_path(&options.root, entry.path());
        let located = match scan_file(entry.path(), &rel_path) {
            Ok(found) => found,
            Err(e) => {
                debug!("Skipping unreadable file {}: {}", rel_path, e);
                continue;
            }
        };
        files_scanned += 1;

        for item in located {
            if !options.wants_tag(item.annotation.tag) {
                continue;
            }
            let scored = scoring::score(item);
            if scored.score >= options.min_score {
                results.push(scored);
            } else {
                below_threshold += 1;
            }
        }
    }

    for level in Level::ALL {
        let count = results.iter().filter(|r| r.level == level).count();
        debug!("{}: {} annotations", level, count);
    }
    info!(
        "Found {} annotations in {} files ({} below min score {})",
        results.len(),
        files_scanned,
        below_threshold,
        options.min_score
    );

    Ok(results)
}
