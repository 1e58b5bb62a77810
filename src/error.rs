use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type used across loading, storage and analytics.
pub type DataResult<T> = Result<T, DataError>;

/// Error type returned by every fallible operation in this crate.
///
/// A single enum shared by the record loader, the binary array codec and the category
/// analytics/chart functions.
#[derive(Debug, Error)]
pub enum DataError {
    /// The input path does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Underlying I/O error other than a missing file (permission denied, short write, ...).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of newline-delimited JSON could not be parsed.
    #[error("invalid json at line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A line parsed as JSON but is not an object, so it cannot become a row.
    #[error("line {line} is not a json object")]
    NotAnObject { line: usize },

    /// A line of newline-delimited JSON is not valid UTF-8.
    #[error("invalid utf-8 at line {line}: {source}")]
    Encoding {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A binary array file's length is not a multiple of the requested element width.
    #[error("{} has {len} bytes, which is not a multiple of the {width}-byte element width", path.display())]
    SizeMismatch { path: PathBuf, len: u64, width: usize },

    /// An element type name was not recognised.
    #[error("unknown element type '{0}'")]
    UnknownElementType(String),

    /// The named column does not appear in any row of the table.
    #[error("column '{column}' not present in table")]
    MissingColumn { column: String },

    /// A tag cell holds something other than a list of strings.
    #[error("row {row} column '{column}' is not a list of strings")]
    InvalidTags { row: usize, column: String },

    /// A required fixed category is absent from the count map.
    #[error("category '{label}' not found")]
    MissingCategory { label: String },

    /// The table does not conform to the provided schema during projection.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be converted into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// CSV export error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The plotting backend failed to lay out or draw a chart.
    #[error("plot error: {0}")]
    Plot(String),

    /// The output path's extension does not name an image format we can render.
    #[error("cannot render chart to '{}': unsupported image format", path.display())]
    UnsupportedImageFormat { path: PathBuf },
}

impl DataError {
    /// Map an I/O error raised while opening `path`, turning "not found" into [`DataError::NotFound`].
    pub(crate) fn from_open(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            DataError::NotFound { path: path.into() }
        } else {
            DataError::Io(err)
        }
    }
}
