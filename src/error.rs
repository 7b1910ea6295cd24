//! Error types for the mdpress library.

use std::io;
use thiserror::Error;

/// Result type alias for mdpress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning a report into a PDF.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the report or writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No usable font family could be located or loaded.
    #[error("Font error: {0}")]
    Font(String),

    /// The layout engine rejected the document.
    #[error("Layout error: {0}")]
    Layout(String),

    /// Error producing an output representation (PDF, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<genpdf::error::Error> for Error {
    fn from(err: genpdf::error::Error) -> Self {
        Error::Layout(err.to_string())
    }
}
