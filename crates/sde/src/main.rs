//! SDE CLI - design elements for documentation builds.
//!
//! Provides commands for:
//! - `classify`: Show the kind and normal form of reference strings
//! - `title`: Look up HTML page titles
//! - `resolve`: Resolve references against a project snapshot
//! - `linktree`: Render navigation link trees
//! - `hyper`: Render `hyper` role occurrences

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ClassifyArgs, GlobalArgs, HyperArgs, LinkTreeArgs, ResolveArgs, TitleArgs};
use output::Output;

/// SDE - design elements for documentation builds.
#[derive(Parser)]
#[command(name = "sde", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify reference strings.
    Classify(ClassifyArgs),
    /// Look up the titles of HTML pages.
    Title(TitleArgs),
    /// Resolve references against a project snapshot.
    Resolve(ResolveArgs),
    /// Render navigation link trees.
    Linktree(LinkTreeArgs),
    /// Render a `hyper` role occurrence.
    Hyper(HyperArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Classify(args) => args.execute(&cli.global),
        Commands::Title(args) => args.execute(&cli.global),
        Commands::Resolve(args) => args.execute(&cli.global),
        Commands::Linktree(args) => args.execute(&cli.global),
        Commands::Hyper(args) => args.execute(&cli.global),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
