//! Error types

/// Errors that can occur while loading or addressing table data.
///
/// Table operations themselves (search, sort, paging, selection) never fail;
/// only data sources and column lookups produce errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a data file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixture or data file did not contain a valid record array.
    #[error("Invalid record data: {0}")]
    Json(#[from] serde_json::Error),

    /// The fetch was cancelled before the data arrived.
    #[error("Fetch cancelled")]
    Cancelled,

    /// A column name did not match any known column.
    #[error("Unknown column: {0}")]
    InvalidColumn(String),
}

/// Result type alias using the library [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
