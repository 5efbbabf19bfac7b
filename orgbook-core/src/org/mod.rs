//! Org-mode text utilities
//!
//! Everything in this module is a pure function over `&str`: no I/O, no
//! shared state beyond compiled regexes, safe to call from any thread.

mod heading;
mod markup;
mod words;

pub use heading::{parse_heading, strip_tags, Heading};
pub use markup::{extract_links, links, remove_markup, OrgLink};
pub use words::count_words;
