//! Error types for orgbook core

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using BookError
pub type Result<T> = std::result::Result<T, BookError>;

/// Coarse classification of a [`BookError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid builder configuration
    Config,
    /// A referenced file is absent
    NotFound,
    /// Unreadable, wrongly encoded, empty or structurally invalid content
    Parse,
}

/// Top-level error type for all orgbook operations
#[derive(Debug, Error)]
pub enum BookError {
    #[error("Configuration error for {}: {detail}", path.display())]
    Config { path: PathBuf, detail: String },

    #[error("File not found: {}: {detail}", path.display())]
    NotFound { path: PathBuf, detail: String },

    #[error("Parse error in {}: {detail}", path.display())]
    Parse { path: PathBuf, detail: String },
}

impl BookError {
    pub fn config(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            detail: detail.into(),
        }
    }

    pub fn not_found(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::NotFound {
            path: path.into(),
            detail: detail.into(),
        }
    }

    pub fn parse(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Classify an I/O failure while reading `path`.
    ///
    /// A missing file becomes [`ErrorKind::NotFound`] with `missing_detail`;
    /// everything else is a parse error carrying the cause.
    pub fn from_io(path: &Path, err: &io::Error, missing_detail: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::not_found(path, missing_detail),
            io::ErrorKind::PermissionDenied => Self::parse(path, "Permission denied"),
            io::ErrorKind::InvalidData => {
                Self::parse(path, "File encoding error - expected UTF-8")
            }
            _ => Self::parse(path, format!("Unexpected error reading file: {err}")),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config { .. } => ErrorKind::Config,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Parse { .. } => ErrorKind::Parse,
        }
    }

    /// The file or directory the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::Config { path, .. } | Self::NotFound { path, .. } | Self::Parse { path, .. } => {
                path
            }
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::Config { detail, .. }
            | Self::NotFound { detail, .. }
            | Self::Parse { detail, .. } => detail,
        }
    }
}
