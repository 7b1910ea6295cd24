//! Non-fatal warnings raised while classifying or rendering a report.
//!
//! Anything that can be isolated to a single block is recovered from and
//! reported here instead of aborting the run: the block is dropped or
//! repaired, the warning is pushed on this channel, and processing
//! continues. Fatal conditions (unreadable input, unwritable output) use
//! [`crate::Error`] instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A recoverable problem encountered during parsing or rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A table data row did not match the header's column count and was
    /// padded or truncated to fit.
    RaggedTableRow {
        /// 0-indexed input line the row came from
        line: usize,
        /// Column count of the header row
        expected: usize,
        /// Column count found on this row
        found: usize,
    },

    /// An image reference pointed at a file that does not exist.
    MissingImage {
        /// The path as resolved at render time
        path: PathBuf,
    },

    /// An image file exists but could not be read or decoded.
    UnreadableImage {
        /// The path as resolved at render time
        path: PathBuf,
        /// Decoder or I/O failure message
        reason: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::RaggedTableRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "table row at line {} has {} cells, expected {}",
                line + 1,
                found,
                expected
            ),
            Warning::MissingImage { path } => {
                write!(f, "image not found, skipped: {}", path.display())
            }
            Warning::UnreadableImage { path, reason } => {
                write!(f, "could not load image {}: {}", path.display(), reason)
            }
        }
    }
}
