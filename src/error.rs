use thiserror::Error;

/// Errors that may rise in Parsing process.
/// Malformed fields are never an error: they are
/// represented by a sentinel value within the record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    /// Line does not start with a known record keyword
    #[error("unknown record type \"{0}\"")]
    UnknownRecordType(String),
    /// Record keyword does not match the record being parsed
    #[error("expecting \"{expected}\" record, got \"{found}\"")]
    RecordTypeMismatch { expected: String, found: String },
    /// Second `CAS` record, while rejecting duplicates
    #[error("line {0}: duplicate caster record")]
    DuplicateCaster(usize),
    /// Second `NET` record, while rejecting duplicates
    #[error("line {0}: duplicate network record")]
    DuplicateNetwork(usize),
    /// Invalid [crate::parser::SingletonPolicy] description
    #[error("unknown singleton policy \"{0}\"")]
    SingletonPolicy(String),
}

/// Library level errors
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a sourcetable file
    #[error("i/o error")]
    IoError(#[from] std::io::Error),
    /// Sourcetable content could not be parsed
    #[error("parsing error")]
    ParsingError(#[from] ParsingError),
}
