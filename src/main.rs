mod cli;
mod convert;
mod emit;
mod error;
mod sarif;
mod types;

use std::fs::File;
use std::io::BufReader;

use clap::Parser;
use tracing::info;

use crate::error::ConvertError;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 1;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    // Logs go to stderr; stdout stays empty on success.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, ConvertError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if !cli.input.exists() {
        return Err(ConvertError::InputNotFound(cli.input.display().to_string()));
    }

    let reader = BufReader::new(File::open(&cli.input)?);
    let (results, rules) = convert::convert(reader)?;
    info!(
        results = results.len(),
        rules = rules.len(),
        "conversion complete"
    );

    let document = emit::build_document(results, rules);
    emit::write_document(&document, &cli.output)?;

    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
