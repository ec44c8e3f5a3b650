use thiserror::Error;

/// Result type for ceyal-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validation failures raised while constructing an event record.
///
/// Every variant is terminal for the record being built: an invalid record
/// is never handed to the analyzer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Timestamp text does not match `yyyy-MM-dd HH:mm:ss`
    #[error("malformed timestamp '{input}': expected yyyy-MM-dd HH:mm:ss")]
    MalformedTimestamp { input: String },

    /// Duration is not a finite, non-negative number of seconds
    #[error("invalid duration '{input}': expected a non-negative number of seconds")]
    InvalidDuration { input: String },

    /// Event name is empty or whitespace only
    #[error("event name must not be empty")]
    EmptyEventName,
}
