//! Error types for mailflow-core.

use thiserror::Error;

/// Result type alias for mailflow-core operations.
pub type Result<T> = std::result::Result<T, MailflowError>;

/// Errors raised while reading an interaction log.
///
/// Queries on a constructed graph never fail: unknown actors, empty windows
/// and out-of-range ranks all have defined empty results.
#[derive(Error, Debug)]
pub enum MailflowError {
    /// A line did not hold exactly `sender receiver time`.
    #[error("line {line}: expected 3 fields (sender receiver time), found {found}")]
    FieldCount {
        /// 1-based line number in the source.
        line: usize,
        /// Number of whitespace-separated fields on the line.
        found: usize,
    },

    /// A field was not a non-negative integer.
    #[error("line {line}: '{token}' is not a non-negative integer")]
    InvalidInteger {
        /// 1-based line number in the source.
        line: usize,
        /// The offending field.
        token: String,
    },

    /// IO error reading the interaction source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
