//! Section type: the body under a second-level heading

use serde::{Deserialize, Serialize};

/// A section within a chapter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub title: String,

    /// Raw org text of the section body, trimmed
    pub content: String,

    /// Number of words in `content`
    pub word_count: usize,

    /// Zero-based position within the chapter
    pub order: usize,
}

impl Section {
    /// Create a section whose word count is a plain whitespace split of
    /// `content`. Parsers replace it with the markup-aware count through
    /// [`Section::with_word_count`].
    pub fn new(title: impl Into<String>, content: impl Into<String>, order: usize) -> Self {
        let content = content.into();
        let word_count = content.split_whitespace().count();
        Self {
            title: title.into(),
            content,
            word_count,
            order,
        }
    }

    /// Override the word count
    pub fn with_word_count(mut self, word_count: usize) -> Self {
        self.word_count = word_count;
        self
    }
}
