//! orgbook Core Library
//!
//! This crate turns a directory of org-mode files into a word-counted
//! [`Book`]: a table-of-contents file lists the chapters, each chapter file
//! is split into sections, and every section is counted with a markup-aware
//! word counter.

pub mod builder;
pub mod error;
pub mod org;
pub mod parser;
pub mod types;

pub use builder::{BookBuilder, BuildConfig, DEFAULT_TOC_FILENAME};
pub use error::{BookError, ErrorKind, Result};
pub use org::{count_words, extract_links, remove_markup};
pub use parser::{parse_chapter, parse_toc, resolve_id, ChapterParser, TocParser};
pub use types::{Book, Chapter, Section, TocEntry, DEFAULT_TARGET_WORDS};

