use thiserror::Error;

/// Fatal errors raised while validating a record stream.
///
/// Every variant carries the 1-based number of the line it was raised on.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The value did not match the one derived from the key suffix.
    #[error("value mismatch at line {line}: expected {expected:?}, got {actual:?}")]
    ValueMismatch {
        line: usize,
        expected: String,
        actual: String,
    },

    /// The line could not be split into a key/value record.
    #[error("malformed record at line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// The underlying reader failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// A single line that does not follow the `kN<TAB>vN` shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No tab separator on the line.
    #[error("no tab separator in {0:?}")]
    MissingSeparator(String),

    /// Key without the literal `k` prefix.
    #[error("key {0:?} does not start with 'k'")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, CheckError>;
