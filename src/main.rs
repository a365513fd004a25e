//! prdraft - Pull Request description drafts
//!
//! Summarizes the last N commits of the current repository with a local
//! model and saves the draft next to the project's other PR notes.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prdraft::cli::generate::handle_generate;
use prdraft::cli::Cli;

fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = handle_generate(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
