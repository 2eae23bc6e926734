use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for load/filter/save operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Error type returned by every stage of the pipeline.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Underlying I/O error while reading (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not valid delimited text (bad quoting, uneven field counts, invalid UTF-8).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is not present in the input header or dataset schema.
    #[error("missing required column '{column}'. headers={headers:?}")]
    MissingColumn { column: String, headers: Vec<String> },

    /// A value could not be parsed into its declared [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A value reached the threshold comparison without being numeric.
    #[error("cannot compare value at row {row} column '{column}' with {threshold}: {value}")]
    NotComparable {
        row: usize,
        column: String,
        value: String,
        threshold: f64,
    },

    /// The output file could not be created or written.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The configuration file could not be parsed.
    #[error("invalid config json: {0}")]
    ConfigJson(#[from] serde_json::Error),

    /// The configuration is well-formed but unusable.
    #[error("invalid config: {message}")]
    Config { message: String },
}

/// Coarse classification of a [`FilterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Io,
    Parse,
    MissingColumn,
    SchemaValidation,
    TypeComparison,
    Write,
    Config,
}

impl FilterError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            Self::Io(_) => ErrorKind::Io,
            Self::Csv(e) => match e.kind() {
                csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                    ErrorKind::FileNotFound
                }
                csv::ErrorKind::Io(_) => ErrorKind::Io,
                _ => ErrorKind::Parse,
            },
            Self::MissingColumn { .. } => ErrorKind::MissingColumn,
            Self::ParseError { .. } => ErrorKind::SchemaValidation,
            Self::NotComparable { .. } => ErrorKind::TypeComparison,
            Self::Write { .. } => ErrorKind::Write,
            Self::ConfigJson(_) | Self::Config { .. } => ErrorKind::Config,
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, FilterError};

    #[test]
    fn io_not_found_is_file_not_found() {
        let err = FilterError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::FileNotFound);

        let err = FilterError::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn write_error_mentions_path() {
        let err = FilterError::Write {
            path: "out/filtered.csv".into(),
            source: csv::Error::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied)),
        };
        assert_eq!(err.kind(), ErrorKind::Write);
        assert!(err.to_string().contains("out/filtered.csv"));
    }
}
