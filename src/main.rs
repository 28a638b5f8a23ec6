use std::process::ExitCode;

use anyhow::Result;
use transcript_extractor::cli;
use transcript_extractor::utils::init_logging;

fn main() -> Result<ExitCode> {
    init_logging();
    cli::run()
}
