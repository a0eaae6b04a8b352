//! Citequery CLI
//!
//! Ask a question about local PDFs and get an answer with inline citations.

use citequery_core::error::exit_codes;
use citequery_core::CiteError;
use clap::Parser;

mod app;
mod output;
mod progress;
mod run;

use app::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = run::run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CiteError>()
        .map(CiteError::exit_code)
        .unwrap_or(exit_codes::GENERAL_ERROR)
}
