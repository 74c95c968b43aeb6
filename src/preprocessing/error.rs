//! Error types for preprocessing operations.

use crate::dataset::ColumnKind;
use thiserror::Error;

/// Error type for preprocessing operations.
#[derive(Debug, Error)]
pub enum PreprocessingError {
    /// A configured field is not present in the dataset.
    #[error("Missing field: '{field}' is not present in the dataset")]
    MissingField { field: String },

    /// `transform` was called before `fit` populated the learned state.
    #[error("Not fitted: {transformer} must be fitted before transform")]
    NotFitted { transformer: &'static str },

    /// A statistic required by `fit` could not be computed.
    #[error("Empty statistic: cannot compute {statistic} of '{field}' (no observed values)")]
    EmptyStatistic {
        field: String,
        statistic: &'static str,
    },

    /// A field holds values of a different type than the operation requires.
    #[error("Column type mismatch: '{field}' is {found}, expected {expected}")]
    ColumnTypeMismatch {
        field: String,
        expected: ColumnKind,
        found: ColumnKind,
    },

    /// A column does not have the same number of rows as the dataset.
    #[error("Length mismatch: column '{field}' has {got} rows, expected {expected}")]
    LengthMismatch {
        field: String,
        expected: usize,
        got: usize,
    },

    /// Two columns share the same name.
    #[error("Duplicate field: '{field}' appears more than once")]
    DuplicateField { field: String },

    /// A missing cell reached an operation that needs complete data.
    #[error("Unexpected missing value in '{field}' at row {row}")]
    UnexpectedMissing { field: String, row: usize },

    /// A row index past the end of the dataset.
    #[error("Row out of range: row {row} requested from a dataset with {n_rows} rows")]
    RowOutOfRange { row: usize, n_rows: usize },

    /// Invalid hyperparameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be parsed or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading configuration.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for PreprocessingError {
    fn from(err: std::io::Error) -> Self {
        PreprocessingError::Io(err.to_string())
    }
}

impl From<bincode::Error> for PreprocessingError {
    fn from(err: bincode::Error) -> Self {
        PreprocessingError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for PreprocessingError {
    fn from(err: serde_json::Error) -> Self {
        PreprocessingError::Config(err.to_string())
    }
}
