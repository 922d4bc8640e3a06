use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod discovery;
mod error;
mod init;
mod output;
mod parser;
mod scoring;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match cli::usage_error(&e) {
            Some((line, code)) => {
                eprintln!("{}", line);
                return ExitCode::from(code);
            }
            None => e.exit(),
        },
    };

    // Initialize tracing - only show logs with --verbose.
    // Logs go to stderr so a report on stdout stays clean.
    let filter = if cli.verbose {
        EnvFilter::new("todo_rank=debug")
    } else {
        EnvFilter::new("todo_rank=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Some(Commands::Scan(args)) => cli::scan::execute(args),
        Some(Commands::Init(args)) => cli::init::execute(args),
        None => cli::scan::execute(cli.scan),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
