use thiserror::Error;

/// Result type for ceyal-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or writing event logs.
///
/// Any row-level error aborts the whole load; partial logs are never returned.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Row does not have the expected number of columns
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Row has the right shape but a field failed validation
    #[error("invalid record on line {line}")]
    InvalidRecord {
        line: u64,
        #[source]
        source: ceyal_types::Error,
    },
}

impl Error {
    /// 1-based line of the offending row, when the error is row-specific
    pub fn line(&self) -> Option<u64> {
        match self {
            Error::FieldCount { line, .. } | Error::InvalidRecord { line, .. } => Some(*line),
            Error::Io(_) | Error::Csv(_) => None,
        }
    }
}
