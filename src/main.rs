//! Org Table - Entry Point
//!
//! Reads the org template export and writes the wiki table in one pass.

use clap::Parser;
use org_table::core::config::{TableConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use org_table::wiki::generate_table;
use std::path::PathBuf;

/// Render Terra Invicta org templates as a sortable wiki table
#[derive(Parser, Debug)]
#[command(name = "org-table")]
#[command(about = "Render the org template export as a wiki table")]
struct Args {
    /// JSON array of org records exported from the game
    #[arg(long, short = 'i', default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the table markup (overwritten)
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = TableConfig::with_paths(args.input, args.output);

    match generate_table(&config) {
        Ok(report) => {
            println!(
                "Wrote {} org rows to {}",
                report.rendered,
                config.output.display()
            );
        }
        Err(e) => {
            tracing::error!("Table generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
