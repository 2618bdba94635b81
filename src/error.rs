//! Error types for passgen.
//!
//! Every failure the pipeline can hit maps to one variant here so callers
//! can branch on the kind of failure rather than matching message strings:
//!
//! - `UnknownOutput` — configuration errors (bad `--output` value)
//! - `Load` / `Malformed` — corpus files or the manifest could not be read
//!   or did not have the expected shape
//! - `EmptyCategory` — sampling from a word list with no words
//! - `UnknownCategory` / `IndexOutOfRange` — a sample plan referenced a
//!   category absent from the corpus, or an index past the end of its word
//!   list (should be unreachable when the pipeline is wired normally, but
//!   the formatter is independently testable and must check)
//! - `Clipboard` — the OS clipboard could not be reached or written

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassgenError {
    #[error("unknown output option '{0}' (expected 'clipboard' or 'print')")]
    UnknownOutput(String),

    #[error("failed to read {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed word list {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("no words available in category '{0}'")]
    EmptyCategory(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("index {index} out of range for category '{category}'")]
    IndexOutOfRange { category: String, index: usize },

    #[error("clipboard error: {0}")]
    Clipboard(String),
}

impl PassgenError {
    /// Attach a path to an I/O failure.
    pub fn load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for passgen.
pub type Result<T> = std::result::Result<T, PassgenError>;
