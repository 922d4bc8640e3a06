use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown tag '{0}' (valid: TODO, FIXME, @next)")]
    UnknownTag(String),
}

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Root directory '{path}' is not accessible: {source}")]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to build ignore pattern '{pattern}': {source}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Output directory '{path}' is not accessible: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output path parent is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to create output file '{path}': {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    WriteReport(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
