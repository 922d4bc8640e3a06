use crate::parser::{parse_line, LocatedAnnotation};
use std::fs;
use std::path::{Component, Path};

/// Path of `path` relative to `root`, `/`-separated
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Parse every line of a file. Non-UTF-8 bytes are replaced, not rejected.
pub fn scan_file(path: &Path, rel_path: &str) -> std::io::Result<Vec<LocatedAnnotation>> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);

    let annotations = content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(line).map(|a| a.locate(rel_path, idx + 1)))
        .collect();

    Ok(annotations)
}
