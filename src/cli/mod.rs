pub mod init;
pub mod scan;

use crate::config::{default_root, DEFAULT_IGNORE, DEFAULT_MIN_SCORE, DEFAULT_TAGS};
use crate::init::AgentType;
use crate::output::ReportFormat;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todo-rank")]
#[command(
    author,
    version,
    about = "Rank TODO/FIXME comments in a source tree by priority"
)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Scan flags used when no subcommand is given
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory tree and print the ranked report (default)
    Scan(ScanArgs),

    /// Write agent instruction files describing the marker convention
    Init(InitArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ScanArgs {
    /// Scan start directory
    #[arg(long, default_value_os_t = default_root())]
    pub root: PathBuf,

    /// Directories to ignore (comma-separated names; entries with * or ? are globs)
    #[arg(long, default_value = DEFAULT_IGNORE)]
    pub ignore: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Output file path (default: stdout)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Minimum score filter
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE, allow_negative_numbers = true)]
    pub min_score: i32,

    /// Tags to scan (comma-separated)
    #[arg(long, default_value = DEFAULT_TAGS)]
    pub tags: String,
}

/// Exit code for usage errors other than a bad `--format`
const USAGE_EXIT_CODE: u8 = 2;

/// Collapse a clap parse error into one diagnostic line and an exit code.
/// Returns `None` for help/version output, which clap prints itself.
pub fn usage_error(err: &clap::Error) -> Option<(String, u8)> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => return None,
        ErrorKind::InvalidValue => {
            if let (Some(ContextValue::String(arg)), Some(ContextValue::String(value))) = (
                err.get(ContextKind::InvalidArg),
                err.get(ContextKind::InvalidValue),
            ) {
                if arg.starts_with("--format") {
                    return Some((
                        format!("error: invalid format: '{}' (must be text or md)", value),
                        1,
                    ));
                }
            }
        }
        _ => {}
    }

    let rendered = err.to_string();
    let line = rendered
        .lines()
        .next()
        .unwrap_or("error: invalid arguments")
        .to_string();
    Some((line, USAGE_EXIT_CODE))
}

#[derive(Args, Clone, Debug)]
pub struct InitArgs {
    /// Which agent file(s) to generate
    #[arg(value_enum)]
    pub agent: AgentType,

    /// Overwrite existing files
    #[arg(long, conflicts_with = "append")]
    pub force: bool,

    /// Append to existing files instead of skipping them
    #[arg(long)]
    pub append: bool,

    /// Directory to write into
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}
