mod defaults;

pub use defaults::*;

use crate::error::ConfigError;
use crate::parser::Tag;
use std::path::PathBuf;

/// Everything the collector needs to scan a tree
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub root: PathBuf,
    /// Directory-name patterns to prune from the walk
    pub ignore: Vec<String>,
    pub min_score: i32,
    pub tags: Vec<Tag>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: default_root(),
            ignore: split_csv(DEFAULT_IGNORE),
            min_score: DEFAULT_MIN_SCORE,
            tags: Tag::ALL.to_vec(),
        }
    }
}

impl ScanOptions {
    /// Keep an annotation only if its tag was selected
    pub fn wants_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Split a comma-separated flag value, dropping blank entries
pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a comma-separated tag list; unknown names are rejected
pub fn parse_tags(s: &str) -> Result<Vec<Tag>, ConfigError> {
    let mut tags = Vec::new();
    for name in split_csv(s) {
        let tag = name.parse::<Tag>()?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}
