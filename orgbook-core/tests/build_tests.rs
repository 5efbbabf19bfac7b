//! Build tests for orgbook-core
//!
//! These tests lay out small book directories on disk and check what
//! `BookBuilder::build` produces for them, including the fatal and
//! non-fatal failure paths.

use orgbook_core::{BookBuilder, BuildConfig, ErrorKind};
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Create a temporary book directory holding `files`
fn book_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("Failed to write test file");
    }
    dir
}

const TWO_CHAPTER_TOC: &str = "#+TITLE: My Book

* Table of Contents
** [[file:good.org][Good Chapter]]
** [[file:missing.org][Missing Chapter]]

* Notes
** [[file:ideas.org][Ideas]]
";

// =============================================================================
// Successful builds
// =============================================================================

#[test]
fn test_build_full_book() {
    let dir = book_dir(&[
        (
            "toc.org",
            "* Contents\n** Part I\n** [[file:one.org][One]]\n** [[id:two-id][Two]]\n",
        ),
        (
            "one.org",
            "#+TITLE: One\n* Chapter One :draft:\nA short intro.\n\
             ** Opening\nThe story starts here.\n** Middle\nThings happen.\n",
        ),
        (
            "two.org",
            "* Chapter Two\n:PROPERTIES:\n:ID: two-id\n:END:\n** Only\nThe end.\n",
        ),
    ]);

    let mut builder = BookBuilder::new(dir.path()).unwrap();
    let book = builder.build().unwrap().expect("book should build");

    assert!(builder.errors().is_empty());
    let titles: Vec<_> = book.chapters.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Chapter One", "Chapter Two"]);

    let one = &book.chapters[0];
    assert_eq!(one.intro_word_count, 3);
    assert_eq!(one.sections.len(), 2);
    assert_eq!(one.word_count(), 3 + 4 + 2);
    assert_eq!(one.part.as_deref(), Some("Part I"));

    let two = &book.chapters[1];
    assert_eq!(two.intro_word_count, 0);
    assert_eq!(two.word_count(), 2);

    assert_eq!(book.total_words(), 11);
}

#[test]
fn test_word_counts_add_up() {
    let dir = book_dir(&[
        ("toc.org", "* TOC\n- [[file:a.org][A]]\n- [[file:b.org][B]]\n"),
        ("a.org", "* A\nintro words\n** S1\n*bold* claim\n** S2\n# hidden\nvisible\n"),
        ("b.org", "* B\n** S\n#+BEGIN_QUOTE\nquoted\n#+END_QUOTE\nown words here\n"),
    ]);

    let book = BookBuilder::new(dir.path()).unwrap().build().unwrap().unwrap();

    for chapter in &book.chapters {
        let sections: usize = chapter.sections.iter().map(|s| s.word_count).sum();
        assert_eq!(chapter.word_count(), chapter.intro_word_count + sections);
        let orders: Vec<_> = chapter.sections.iter().map(|s| s.order).collect();
        assert_eq!(orders, (0..chapter.sections.len()).collect::<Vec<_>>());
    }
    let chapters: usize = book.chapters.iter().map(|c| c.word_count()).sum();
    assert_eq!(book.total_words(), chapters);
    assert_eq!(book.total_words(), 2 + 2 + 1 + 3);
}

#[test]
fn test_parallel_build_matches_sequential() {
    let mut files = vec![("toc.org".to_string(), String::from("* TOC\n"))];
    for i in 0..12 {
        if i % 4 != 3 {
            files.push((format!("ch{i:02}.org"), format!("* Chapter {i}\n** S\n{}\n", "word ".repeat(i))));
        }
        files[0].1.push_str(&format!("** [[file:ch{i:02}.org][Chapter {i}]]\n"));
    }
    let refs: Vec<_> = files.iter().map(|(n, c)| (n.as_str(), c.as_str())).collect();
    let dir = book_dir(&refs);

    let mut sequential = BookBuilder::new(dir.path()).unwrap();
    let seq_book = sequential.build().unwrap().unwrap();

    let mut parallel =
        BookBuilder::with_config(dir.path(), BuildConfig::default().with_parallel(true)).unwrap();
    let par_book = parallel.build().unwrap().unwrap();

    let seq_titles: Vec<_> = seq_book.chapters.iter().map(|c| &c.title).collect();
    let par_titles: Vec<_> = par_book.chapters.iter().map(|c| &c.title).collect();
    assert_eq!(seq_titles, par_titles);
    assert_eq!(seq_book.total_words(), par_book.total_words());
    assert_eq!(sequential.errors(), parallel.errors());
    assert_eq!(
        parallel.errors().len(),
        3,
        "ch03, ch07 and ch11 are missing"
    );
    assert!(parallel.errors()[0].starts_with("ch03.org: "));
}

// =============================================================================
// Partial failure
// =============================================================================

#[test]
fn test_missing_chapter_is_recorded_not_fatal() {
    let dir = book_dir(&[
        ("toc.org", TWO_CHAPTER_TOC),
        ("good.org", "* Good Chapter\nThis is a valid chapter.\n"),
    ]);

    let mut builder = BookBuilder::new(dir.path()).unwrap();
    let book = builder.build().unwrap().expect("one chapter survives");

    assert_eq!(book.chapters.len(), 1);
    assert_eq!(book.chapters[0].title, "Good Chapter");
    assert_eq!(builder.errors().len(), 1);
    assert!(builder.errors()[0].starts_with("missing.org: "));
    assert!(builder.errors()[0].contains("File not found"));
}

#[test]
fn test_undecodable_chapter_is_recorded_not_fatal() {
    let dir = book_dir(&[
        ("toc.org", "* TOC\n** [[file:bad.org][Bad]]\n** [[file:ok.org][Ok]]\n"),
        ("ok.org", "* Ok\nReadable words here.\n"),
    ]);
    fs::write(dir.path().join("bad.org"), b"\xff\xfe").expect("Failed to write test file");

    let mut builder = BookBuilder::new(dir.path()).unwrap();
    let book = builder.build().unwrap().expect("ok.org survives");

    assert_eq!(book.chapters.len(), 1);
    assert_eq!(book.chapters[0].title, "Ok");
    assert_eq!(book.chapters[0].order, 0);
    assert_eq!(builder.errors().len(), 1);
    assert!(builder.errors()[0].starts_with("bad.org: "));
    assert!(builder.errors()[0].contains("UTF-8"));
}

#[test]
fn test_all_chapters_failing_yields_none() {
    let dir = book_dir(&[
        ("toc.org", "* TOC\n** [[file:gone.org][Gone]]\n** [[file:empty.org][Empty]]\n"),
        ("empty.org", "no heading in here\n"),
    ]);

    let mut builder = BookBuilder::new(dir.path()).unwrap();
    assert!(builder.build().unwrap().is_none());
    assert_eq!(builder.errors().len(), 2);
    assert!(builder.errors()[0].starts_with("gone.org: "));
    assert!(builder.errors()[1].starts_with("empty.org: "));
}

#[test]
fn test_errors_reset_between_builds() {
    let dir = book_dir(&[
        ("toc.org", TWO_CHAPTER_TOC),
        ("good.org", "* Good Chapter\ntext\n"),
    ]);

    let mut builder = BookBuilder::new(dir.path()).unwrap();
    builder.build().unwrap();
    assert_eq!(builder.errors().len(), 1);

    fs::write(dir.path().join("missing.org"), "* Found Now\ntext\n").unwrap();
    let book = builder.build().unwrap().unwrap();
    assert_eq!(book.chapters.len(), 2);
    assert!(builder.errors().is_empty());
}

// =============================================================================
// TOC outcomes
// =============================================================================

#[test]
fn test_missing_toc_is_fatal() {
    let dir = book_dir(&[("chapter.org", "* Lonely\n")]);
    let err = BookBuilder::new(dir.path()).unwrap().build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.path().ends_with("toc.org"));
}

#[test]
fn test_empty_toc_is_fatal() {
    let dir = book_dir(&[("toc.org", "")]);
    let mut builder = BookBuilder::new(dir.path()).unwrap();
    let err = builder.build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(builder.errors().is_empty());
}

#[test]
fn test_toc_without_entries_yields_none() {
    let dir = book_dir(&[("toc.org", "This is not valid org content [[invalid")]);
    let mut builder = BookBuilder::new(dir.path()).unwrap();
    assert!(builder.build().unwrap().is_none());
    assert!(builder.errors().is_empty());
}

#[test]
fn test_toc_with_only_parts_yields_none() {
    let dir = book_dir(&[("toc.org", "* TOC\n** Part One\n** Part Two\n")]);
    let mut builder = BookBuilder::new(dir.path()).unwrap();
    assert!(builder.build().unwrap().is_none());
    assert!(builder.errors().is_empty());
}
