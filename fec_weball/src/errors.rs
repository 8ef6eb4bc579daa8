//! Error types for line decoding.

/// Why a single line could not be decoded into a record.
///
/// Decoding errors are per-line and recoverable: the batch parser counts them
/// and moves on to the next line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The line carried fewer columns than the layout requires.
    #[error("truncated record: expected {expected} fields, found {found}")]
    Truncated { expected: usize, found: usize },
    /// The candidate ID column was blank.
    #[error("missing candidate id")]
    MissingCandidateId,
}

impl DecodeError {
    /// Short, stable reason label used for failure counts.
    pub fn reason(&self) -> &'static str {
        match self {
            DecodeError::Truncated { .. } => "truncated record",
            DecodeError::MissingCandidateId => "missing candidate id",
        }
    }
}
