//! Chapter type representing a single chapter file of a book

use super::{progress, Section};
use serde::{Deserialize, Serialize};

/// A single chapter of a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    /// Chapter title
    pub title: String,

    /// Sections in file order
    pub sections: Vec<Section>,

    /// Position of the chapter within its book
    pub order: usize,

    /// Title of the table-of-contents part this chapter falls under
    pub part: Option<String>,

    /// Words written before the first section heading
    pub intro_word_count: usize,

    /// Word target for this chapter (0 = no target)
    pub target_words: u32,

    pub summary: String,
}

impl Chapter {
    /// Create a new chapter with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            order: 0,
            part: None,
            intro_word_count: 0,
            target_words: 0,
            summary: String::new(),
        }
    }

    /// Set the intro word count
    pub fn with_intro_word_count(mut self, words: usize) -> Self {
        self.intro_word_count = words;
        self
    }

    /// Set the word target
    pub fn with_target_words(mut self, target_words: u32) -> Self {
        self.target_words = target_words;
        self
    }

    /// Add a single section
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Intro words plus every section's words
    pub fn word_count(&self) -> usize {
        self.intro_word_count + self.sections.iter().map(|s| s.word_count).sum::<usize>()
    }

    pub fn progress_percentage(&self) -> f64 {
        progress(self.word_count(), self.target_words)
    }

    /// Find a section by its exact title
    pub fn section_by_title(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Stable sort of the sections by their `order` field
    pub fn reorder_sections(&mut self) {
        self.sections.sort_by_key(|s| s.order);
    }
}
