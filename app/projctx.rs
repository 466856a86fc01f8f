//! Command-line entry point for projctx.
//!
//! Writes `project_context.txt` for the current directory. There are no
//! options besides `--help` and `--version`.

use clap::Parser;
use projctx::{OUTPUT_FILE_NAME, create_project_context};
use std::process::exit;

/// Flatten the current directory into project_context.txt
#[derive(Parser)]
#[command(name = "projctx", version, about, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    #[cfg(feature = "logging")]
    init_logging();

    match create_project_context(".") {
        Ok(_summary) => {
            #[cfg(feature = "logging")]
            tracing::info!(
                files = _summary.files_written,
                unreadable = _summary.read_failures,
                excluded = _summary.files_excluded,
                "context written"
            );
            println!("Project context has been created in '{}'", OUTPUT_FILE_NAME);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
