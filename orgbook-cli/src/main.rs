//! orgbook CLI - word counts for a book written in org-mode files

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "orgbook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a book from a directory and report its word counts
    Report {
        /// Directory containing toc.org and the chapter files
        directory: PathBuf,

        /// Output the whole book as JSON
        #[arg(long)]
        json: bool,

        /// Parse chapter files in parallel
        #[arg(long)]
        parallel: bool,

        /// Word target for the whole book
        #[arg(long)]
        target_words: Option<u32>,

        /// Book title
        #[arg(long)]
        title: Option<String>,

        /// Book author
        #[arg(long)]
        author: Option<String>,
    },

    /// List the entries of a table-of-contents file
    Toc {
        /// Path to the TOC file
        file: PathBuf,
    },

    /// Count the words of a single org file
    Count {
        /// Path to the org file
        file: PathBuf,

        /// Output the count as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "orgbook=debug,orgbook_core=debug"
    } else {
        "orgbook=info,orgbook_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Report {
            directory,
            json,
            parallel,
            target_words,
            title,
            author,
        } => {
            let options = commands::ReportOptions {
                json,
                parallel,
                target_words,
                title,
                author,
            };
            commands::report(&directory, &options)
        }

        Commands::Toc { file } => commands::toc(&file),

        Commands::Count { file, json } => commands::count(&file, json),
    }
}
