use thiserror::Error;

/// Broad family an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Arithmetic,
    OutOfRange,
}

#[derive(Debug, Error, PartialEq)]
pub enum SongDistError {
    #[error("column `{0}` is not present in the dataset")]
    MissingColumn(String),

    #[error("feature selection is empty")]
    EmptySelection,

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("non-numeric value {value} at row {row}, column `{column}`")]
    NonFinite {
        row: usize,
        column: String,
        value: f32,
    },

    #[error("duplicate row key at position {0}")]
    DuplicateKey(usize),

    #[error("duplicate column `{0}`")]
    DuplicateColumn(String),

    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("no rows to choose from")]
    NoCandidates,

    #[error("dataset carries no cluster labels")]
    MissingClusters,

    #[error("unknown feature `{0}`")]
    UnknownFeature(String),

    #[error("feature `{0}` has no upper bound")]
    UnboundedFeature(String),

    #[error("unknown metric `{0}`")]
    UnknownMetric(String),

    #[error("degenerate normalization bounds: min == max == {0}")]
    DegenerateBounds(f32),

    #[error("non-finite normalization bounds: min {min}, max {max}")]
    NonFiniteBounds { min: f32, max: f32 },

    #[error("row index {index} out of range for {len} rows")]
    OutOfRange { index: usize, len: usize },
}

impl SongDistError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DegenerateBounds(_) | Self::NonFiniteBounds { .. } => ErrorKind::Arithmetic,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            _ => ErrorKind::InvalidInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, SongDistError>;

#[cfg(feature = "pyo3")]
impl From<SongDistError> for pyo3::PyErr {
    fn from(err: SongDistError) -> Self {
        use pyo3::exceptions::{PyArithmeticError, PyIndexError, PyValueError};
        let msg = err.to_string();
        match err.kind() {
            ErrorKind::InvalidInput => PyValueError::new_err(msg),
            ErrorKind::Arithmetic => PyArithmeticError::new_err(msg),
            ErrorKind::OutOfRange => PyIndexError::new_err(msg),
        }
    }
}
