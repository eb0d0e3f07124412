use thiserror::Error;

/// The input could not be read as a bank account number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("The account number is null or empty")]
    Empty,

    /// The input is not `BB-BBBB-AAAAAAA-SS(S)` with space, hyphen or dot separators
    #[error("The account number is malformed")]
    Malformed,
}

/// A value can't be rendered in the requested output format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("The IRD number has an invalid length")]
    InvalidLength(i64),
}
