//! Core types for the orgbook book model

mod book;
mod chapter;
mod section;
mod toc;

pub use book::{Book, DEFAULT_TARGET_WORDS};
pub use chapter::Chapter;
pub use section::Section;
pub use toc::TocEntry;

/// Percentage of `target` reached by `words`, capped at 100.
///
/// A target of zero means "no target" and always reports 0.
pub(crate) fn progress(words: usize, target: u32) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (words as f64 / f64::from(target) * 100.0).min(100.0)
}
