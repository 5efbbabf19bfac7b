//! Report command implementation

use anyhow::{bail, Context, Result};
use orgbook_core::{Book, BookBuilder, BuildConfig};
use std::path::Path;
use tracing::{info, warn};

/// Flags of the report command
#[derive(Debug, Default)]
pub struct ReportOptions {
    pub json: bool,
    pub parallel: bool,
    pub target_words: Option<u32>,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl ReportOptions {
    fn build_config(&self) -> BuildConfig {
        let mut config = BuildConfig::default().with_parallel(self.parallel);
        if let Some(target) = self.target_words {
            config = config.with_target_words(target);
        }
        if let Some(title) = &self.title {
            config = config.with_title(title);
        }
        if let Some(author) = &self.author {
            config = config.with_author(author);
        }
        config
    }
}

/// Build the book in `directory` and print its word counts
pub fn report(directory: &Path, options: &ReportOptions) -> Result<()> {
    let mut builder = BookBuilder::with_config(directory, options.build_config())
        .with_context(|| format!("Invalid book directory: {}", directory.display()))?;

    info!(
        directory = %builder.directory().display(),
        toc = %builder.config().toc_filename,
        parallel = builder.config().parallel,
        "Building book"
    );

    let book = builder
        .build()
        .with_context(|| format!("Failed to read table of contents in {}", directory.display()))?;

    for error in builder.errors() {
        warn!("{}", error);
    }

    let Some(book) = book else {
        bail!(
            "Failed to build book from directory: {}",
            builder.directory().display()
        );
    };

    info!(
        chapters = book.chapters.len(),
        words = book.total_words(),
        skipped = builder.errors().len(),
        "Built book"
    );

    if options.json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        print_report(&book);
    }

    Ok(())
}

fn print_report(book: &Book) {
    println!("Book: {}", book.title);
    println!("Author: {}", book.author);
    println!(
        "Total Words: {} ({:.1}% of {})",
        book.total_words(),
        book.progress_percentage(),
        book.target_words
    );
    println!();

    let mut current_part = None;
    for (i, chapter) in book.chapters.iter().enumerate() {
        if chapter.part.is_some() && chapter.part != current_part {
            current_part = chapter.part.clone();
            if let Some(part) = &current_part {
                println!("== {} ==", part);
            }
        }
        println!(
            "Chapter {}: {} ({} words)",
            i + 1,
            chapter.title,
            chapter.word_count()
        );
        for (j, section) in chapter.sections.iter().enumerate() {
            println!(
                "  Section {}: {} ({} words)",
                j + 1,
                section.title,
                section.word_count
            );
        }
    }

    println!();
    println!(
        "Summary: {} chapters, {} total words",
        book.chapters.len(),
        book.total_words()
    );
}
