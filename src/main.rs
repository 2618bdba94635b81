//! passgen — generate human-memorable passphrases from word lists.
//!
//! This file is the application entry point. It is intentionally kept
//! small and is responsible only for:
//!
//! - Parsing CLI arguments
//! - Running the generation pipeline
//! - Binding the real output sink (clipboard or stdout)
//! - Exiting with appropriate status codes
//!
//! All generation logic lives in the library modules.

use clap::Parser;

use passgen::cli::Cli;
use passgen::config::Config;
use passgen::corpus::CorpusPaths;
use passgen::error::Result;
use passgen::output;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    let passphrase = passgen::generate(&config, &CorpusPaths::default())?;

    output::sink_for(config.output).deliver(&passphrase)
}
