use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use crate::models::RunSummary;
use crate::transcript::extract_transcript;

#[derive(Parser, Debug)]
#[command(name = "extract-transcript")]
#[command(version = "0.1.0")]
#[command(
    about = "Extract a human-readable transcript from a Claude Code JSONL session file",
    long_about = None
)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Session log to read (one JSON record per line)
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,
    /// Transcript file to write
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,
}

/// Parse the program name plus exactly two paths; anything else yields `None`
pub fn parse_args<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    // Counted before clap sees them so `--` or flag-like words never change the count
    if args.len() != 3 {
        tracing::debug!(count = args.len().saturating_sub(1), "expected exactly two arguments");
        return None;
    }
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli),
        Err(e) => {
            tracing::debug!(error = %e, "invalid arguments");
            None
        }
    }
}

pub fn run() -> Result<ExitCode> {
    let Some(cli) = parse_args(std::env::args_os()) else {
        println!("{}", Cli::command().render_usage());
        return Ok(ExitCode::FAILURE);
    };

    let summary = extract_transcript(&cli.input, &cli.output)?;
    print_summary(&summary, &cli.output);

    Ok(ExitCode::SUCCESS)
}

fn print_summary(summary: &RunSummary, output: &Path) {
    println!("Done. Read {} JSONL lines.", summary.lines_read);
    println!("Wrote {} conversation entries to {}", summary.entries_written, output.display());
    println!("Skipped entry types: {}", summary.skipped_types);
    println!("Output size: {} chars", summary.output_chars);
}
