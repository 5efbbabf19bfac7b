//! Table of contents types

use serde::{Deserialize, Serialize};

/// A single entry parsed from the table-of-contents file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TocEntry {
    /// A chapter stored in `filename`, relative to the TOC's directory
    Chapter { filename: String, title: String },

    /// A link-free divider grouping the chapters that follow it
    Part { title: String },
}

impl TocEntry {
    /// Create a chapter entry
    pub fn chapter(filename: impl Into<String>, title: impl Into<String>) -> Self {
        Self::Chapter {
            filename: filename.into(),
            title: title.into(),
        }
    }

    /// Create a part marker
    pub fn part(title: impl Into<String>) -> Self {
        Self::Part {
            title: title.into(),
        }
    }

    /// Display title of the entry
    pub fn title(&self) -> &str {
        match self {
            Self::Chapter { title, .. } | Self::Part { title } => title,
        }
    }

    /// The chapter file, if this is a chapter entry
    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::Chapter { filename, .. } => Some(filename),
            Self::Part { .. } => None,
        }
    }

    pub fn is_part(&self) -> bool {
        matches!(self, Self::Part { .. })
    }
}
