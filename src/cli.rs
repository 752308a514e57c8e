use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lint2sarif",
    version,
    about = "Convert lintrunner JSON output into a SARIF 2.1.0 document"
)]
pub struct Cli {
    /// Path to the newline-delimited JSON lint results
    #[arg(long)]
    pub input: PathBuf,

    /// Path to write the SARIF document (parent directories are created)
    #[arg(long)]
    pub output: PathBuf,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
