use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the input path (parsing and file I/O).
///
/// The solver core never produces one of these: `solve` and `verify` are
/// infallible. This enum only covers the boundary between the outside world
/// (files, command line) and a [`crate::grid::Grid`].
#[derive(Debug, Error)]
pub enum SudokuError {
    #[error("No such file: {0}")]
    NoSuchFile(PathBuf),

    #[error("Format error{detail}")]
    FormatError { detail: DetailSuffix },

    /// An I/O failure reading the input path that isn't "the file doesn't
    /// exist" — permission denied, the path is a directory, the contents
    /// aren't valid UTF-8, and so on.
    #[error("Unknown error: {0}")]
    UnknownError(String),
}

/// Wraps an optional detail string so the `Display` impl can omit the
/// leading ": " when there is none, without hand-rolling `Display` for the
/// whole error enum.
#[derive(Debug)]
pub struct DetailSuffix(pub Option<String>);

impl std::fmt::Display for DetailSuffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(d) => write!(f, ": {d}"),
            None => Ok(()),
        }
    }
}

impl SudokuError {
    pub fn format_error(detail: impl Into<String>) -> Self {
        SudokuError::FormatError {
            detail: DetailSuffix(Some(detail.into())),
        }
    }
}
