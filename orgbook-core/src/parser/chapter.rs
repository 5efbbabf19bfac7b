//! Chapter parser

use super::{first_top_level_span, read_org_file};
use crate::error::Result;
use crate::org::{count_words, parse_heading};
use crate::types::{Chapter, Section};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parser for a single chapter file
#[derive(Debug, Clone)]
pub struct ChapterParser {
    path: PathBuf,
}

impl ChapterParser {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the chapter file.
    ///
    /// Returns `Ok(None)` when the file holds no top-level heading; a
    /// missing file is `NotFound` and an unreadable one is `Parse`.
    pub fn parse(&self) -> Result<Option<Chapter>> {
        let content = read_org_file(&self.path, "Chapter file referenced in TOC but not found")?;
        let chapter = parse_chapter(&content);
        if let Some(chapter) = &chapter {
            debug!(
                path = %self.path.display(),
                sections = chapter.sections.len(),
                words = chapter.word_count(),
                "Parsed chapter"
            );
        }
        Ok(chapter)
    }
}

/// Where the scanner currently is inside the chapter span
enum Span<'a> {
    /// Before the first second-level heading
    Intro(Vec<&'a str>),
    /// Inside a section, collecting its body lines
    Section { title: String, lines: Vec<&'a str> },
}

/// Extract a chapter from org text.
///
/// The first top-level heading is the chapter; everything after the next
/// top-level heading is ignored. Each second-level heading inside the span
/// opens a section, and text before the first one is intro content that is
/// counted but not kept.
pub fn parse_chapter(content: &str) -> Option<Chapter> {
    if content.trim().is_empty() {
        return None;
    }
    let (heading, body) = first_top_level_span(content)?;
    if heading.title.is_empty() {
        return None;
    }

    let mut chapter = Chapter::new(heading.title);
    let mut span = Span::Intro(Vec::new());

    for line in body {
        match parse_heading(line).filter(|h| h.level == 2) {
            Some(next) => {
                close_span(span, &mut chapter);
                span = Span::Section {
                    title: next.title,
                    lines: Vec::new(),
                };
            }
            None => match &mut span {
                Span::Intro(lines) | Span::Section { lines, .. } => lines.push(line),
            },
        }
    }
    close_span(span, &mut chapter);

    Some(chapter)
}

fn close_span(span: Span<'_>, chapter: &mut Chapter) {
    match span {
        Span::Intro(lines) => {
            chapter.intro_word_count = count_words(lines.join("\n").trim());
        }
        Span::Section { title, lines } => {
            let content = lines.join("\n").trim().to_string();
            let words = count_words(&content);
            let order = chapter.sections.len();
            chapter.add_section(Section::new(title, content, order).with_word_count(words));
        }
    }
}
