//! Book assembly from a directory of org files

use crate::error::{BookError, Result};
use crate::parser::{ChapterParser, TocParser};
use crate::types::{Book, Chapter, TocEntry, DEFAULT_TARGET_WORDS};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Name of the table-of-contents file looked up in the book directory
pub const DEFAULT_TOC_FILENAME: &str = "toc.org";

/// Settings for a [`BookBuilder`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildConfig {
    /// TOC file name, relative to the book directory
    pub toc_filename: String,

    pub title: String,
    pub author: String,
    pub description: String,
    pub target_words: u32,

    /// Parse chapter files on the rayon thread pool
    pub parallel: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            toc_filename: DEFAULT_TOC_FILENAME.to_string(),
            title: "Book Monitor".to_string(),
            author: "Unknown".to_string(),
            description: String::new(),
            target_words: DEFAULT_TARGET_WORDS,
            parallel: false,
        }
    }
}

impl BuildConfig {
    pub fn with_toc_filename(mut self, toc_filename: impl Into<String>) -> Self {
        self.toc_filename = toc_filename.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_target_words(mut self, target_words: u32) -> Self {
        self.target_words = target_words;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// A chapter file to parse, with the part it was listed under
struct ChapterJob<'a> {
    filename: &'a str,
    part: Option<&'a str>,
}

/// Builds a [`Book`] from a directory holding `toc.org` and chapter files.
///
/// A broken TOC aborts the build; a broken chapter only adds a line to
/// [`BookBuilder::errors`].
#[derive(Debug)]
pub struct BookBuilder {
    directory: PathBuf,
    config: BuildConfig,
    errors: Vec<String>,
}

impl BookBuilder {
    /// Create a builder with the default configuration
    pub fn new(directory: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(directory, BuildConfig::default())
    }

    /// Create a builder, checking that `directory` is an existing directory
    pub fn with_config(directory: impl AsRef<Path>, config: BuildConfig) -> Result<Self> {
        let directory = directory.as_ref();
        if directory.as_os_str().is_empty() {
            return Err(BookError::config(directory, "Directory path cannot be empty"));
        }
        if !directory.exists() {
            return Err(BookError::config(directory, "Directory does not exist"));
        }
        if !directory.is_dir() {
            return Err(BookError::config(directory, "Path is not a directory"));
        }

        Ok(Self {
            directory: directory.to_path_buf(),
            config,
            errors: Vec::new(),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Diagnostics collected by the most recent [`BookBuilder::build`]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Build the book.
    ///
    /// Returns `Ok(None)` when the TOC lists nothing or when no listed
    /// chapter could be parsed. TOC failures are returned as errors; chapter
    /// failures are recorded in [`BookBuilder::errors`] as
    /// `"<filename>: <message>"`.
    pub fn build(&mut self) -> Result<Option<Book>> {
        self.errors.clear();

        let toc_path = self.directory.join(&self.config.toc_filename);
        let entries = TocParser::new(&toc_path).parse()?;
        if entries.is_empty() {
            warn!(toc = %toc_path.display(), "No chapters found in TOC file");
            return Ok(None);
        }
        info!(entries = entries.len(), "Parsed table of contents");

        let jobs = chapter_jobs(&entries);
        let directory = self.directory.as_path();
        let outcomes: Vec<Result<Option<Chapter>>> = if self.config.parallel {
            jobs.par_iter()
                .map(|job| ChapterParser::new(directory.join(job.filename)).parse())
                .collect()
        } else {
            jobs.iter()
                .map(|job| ChapterParser::new(directory.join(job.filename)).parse())
                .collect()
        };

        let mut book = Book::new(&self.config.title, &self.config.author)
            .with_target_words(self.config.target_words)
            .with_description(&self.config.description);

        for (job, outcome) in jobs.iter().zip(outcomes) {
            match outcome {
                Ok(Some(mut chapter)) => {
                    chapter.order = book.chapters.len();
                    chapter.part = job.part.map(str::to_string);
                    debug!(
                        file = job.filename,
                        words = chapter.word_count(),
                        "Added chapter"
                    );
                    book.add_chapter(chapter);
                }
                Ok(None) => self.record(job.filename, "No content found in chapter file"),
                Err(err) => self.record(job.filename, err),
            }
        }

        if book.chapters.is_empty() {
            warn!(
                failures = self.errors.len(),
                "No chapter in the TOC could be parsed"
            );
            return Ok(None);
        }

        info!(
            chapters = book.chapters.len(),
            words = book.total_words(),
            skipped = self.errors.len(),
            "Built book"
        );
        Ok(Some(book))
    }

    fn record(&mut self, filename: &str, message: impl Display) {
        let line = format!("{filename}: {message}");
        debug!("{line}");
        self.errors.push(line);
    }
}

/// Chapter entries in TOC order, each tagged with the preceding part marker
fn chapter_jobs(entries: &[TocEntry]) -> Vec<ChapterJob<'_>> {
    let mut part = None;
    let mut jobs = Vec::new();
    for entry in entries {
        match entry {
            TocEntry::Part { title } => part = Some(title.as_str()),
            TocEntry::Chapter { filename, .. } => jobs.push(ChapterJob {
                filename: filename.as_str(),
                part,
            }),
        }
    }
    jobs
}
