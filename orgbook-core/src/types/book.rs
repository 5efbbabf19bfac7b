//! The main Book type - the root of the model

use super::{progress, Chapter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Word target used when none is configured
pub const DEFAULT_TARGET_WORDS: u32 = 50_000;

/// A book assembled from a directory of org files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Ordered list of chapters, in table-of-contents order
    pub chapters: Vec<Chapter>,

    /// Total number of words the book is aiming for
    pub target_words: u32,

    /// Free-form description
    pub description: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Create an empty book with the given title and author
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            title: title.into(),
            author: author.into(),
            chapters: Vec::new(),
            target_words: DEFAULT_TARGET_WORDS,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the word target
    pub fn with_target_words(mut self, target_words: u32) -> Self {
        self.target_words = target_words;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a chapter to the book
    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
        self.updated_at = Utc::now();
    }

    /// Sum of every chapter's word count
    pub fn total_words(&self) -> usize {
        self.chapters.iter().map(Chapter::word_count).sum()
    }

    /// Progress towards `target_words` as a percentage in `0.0..=100.0`
    pub fn progress_percentage(&self) -> f64 {
        progress(self.total_words(), self.target_words)
    }

    /// Find a chapter by its exact title
    pub fn chapter_by_title(&self, title: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.title == title)
    }
}
