use std::io;

use thiserror::Error;

/// Errors raised while decoding.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// The stream ended before the first byte of a value.
    #[error("end of stream while reading {0}")]
    CleanEOF(String),
    /// The stream ended or failed part way through a value.
    #[error("incomplete value: {0}")]
    Incomplete(String),
    /// The encoded value is longer than its type allows.
    #[error("{0} is too large")]
    TooLarge(String),
}

/// Errors raised while encoding.
#[derive(Debug, Error)]
pub enum WritingError {
    /// The underlying writer failed.
    #[error("io error: {0}")]
    IoError(#[from] io::Error),
}
