//! Agent instruction files describing the marker convention.
//!
//! Templates are compiled into the binary. Existing files are skipped,
//! overwritten, or appended to depending on [`WriteMode`].

use crate::error::InitError;
use clap::ValueEnum;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

const LLMS_TXT: &str = include_str!("../../templates/llms.txt");
const CLAUDE_MD: &str = include_str!("../../templates/CLAUDE.md");
const CURSORRULES: &str = include_str!("../../templates/cursorrules");

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentType {
    /// Generate llms.txt
    Llms,
    /// Generate CLAUDE.md
    Claude,
    /// Generate .cursorrules
    Cursor,
    /// Generate all files
    All,
}

impl AgentType {
    /// (file name, template) pairs written for this agent type
    pub fn templates(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            AgentType::Llms => vec![("llms.txt", LLMS_TXT)],
            AgentType::Claude => vec![("CLAUDE.md", CLAUDE_MD)],
            AgentType::Cursor => vec![(".cursorrules", CURSORRULES)],
            AgentType::All => vec![
                ("llms.txt", LLMS_TXT),
                ("CLAUDE.md", CLAUDE_MD),
                (".cursorrules", CURSORRULES),
            ],
        }
    }
}

/// What to do when a target file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Skip,
    Force,
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Overwritten,
    Appended,
    Skipped,
}

#[derive(Debug)]
pub struct InitResult {
    pub file: PathBuf,
    pub outcome: Result<InitOutcome, InitError>,
}

/// Write the templates for `agent` into `dir`. Every file is attempted even if
/// an earlier one fails.
pub fn run(dir: &Path, agent: AgentType, mode: WriteMode) -> Vec<InitResult> {
    agent
        .templates()
        .into_iter()
        .map(|(name, content)| {
            let file = dir.join(name);
            let outcome = write_template(&file, content, mode);
            InitResult { file, outcome }
        })
        .collect()
}

fn write_template(path: &Path, content: &str, mode: WriteMode) -> Result<InitOutcome, InitError> {
    let exists = path.exists();
    let write_err = |source| InitError::Write {
        path: path.to_path_buf(),
        source,
    };

    match (exists, mode) {
        (true, WriteMode::Skip) => {
            debug!("{} exists, skipping", path.display());
            Ok(InitOutcome::Skipped)
        }
        (true, WriteMode::Append) => {
            let existing = fs::read_to_string(path).map_err(|source| InitError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let mut file = OpenOptions::new()
                .append(true)
                .open(path)
                .map_err(write_err)?;

            let separator = if existing.is_empty() {
                ""
            } else if existing.ends_with('\n') {
                "\n"
            } else {
                "\n\n"
            };
            file.write_all(separator.as_bytes())
                .and_then(|_| file.write_all(content.as_bytes()))
                .map_err(write_err)?;
            Ok(InitOutcome::Appended)
        }
        (true, WriteMode::Force) => {
            fs::write(path, content).map_err(write_err)?;
            Ok(InitOutcome::Overwritten)
        }
        (false, _) => {
            fs::write(path, content).map_err(write_err)?;
            Ok(InitOutcome::Created)
        }
    }
}
