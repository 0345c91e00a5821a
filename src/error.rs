//! Error taxonomy of the motif engine.
//!
//! None of these is fatal to a run: the engine logs the error, counts it
//! in [`RunStats`](crate::phospho::run::RunStats) and moves on to the next
//! record or site.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotifError {
    /// A modification position could not be turned into a residue index
    #[error("malformed modification '{piece}' in annotation '{annotation}': {reason}")]
    MalformedModification {
        annotation: String,
        piece: String,
        reason: String,
    },

    /// Empty protein or peptide sequence
    #[error("invalid sequence for '{record}': {reason}")]
    InvalidSequence { record: String, reason: String },

    /// A peptide row that does not have the expected shape
    #[error("malformed row: {0}")]
    MalformedRow(String),

    /// Inconsistent amino acid property table
    #[error("invalid amino acid table: {0}")]
    InvalidTable(String),
}

impl MotifError {
    pub fn malformed_modification(
        annotation: impl Into<String>,
        piece: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MotifError::MalformedModification {
            annotation: annotation.into(),
            piece: piece.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_sequence(record: impl Into<String>, reason: impl Into<String>) -> Self {
        MotifError::InvalidSequence {
            record: record.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MotifError>;
