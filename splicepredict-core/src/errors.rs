use thiserror::Error;

use crate::models::RecordId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Malformed record {id}: column '{column}' has unparseable value '{value}'")]
    MalformedRecord {
        id: RecordId,
        column: String,
        value: String,
    },

    #[error("Malformed record {id}: expected {expected} fields, found {found}")]
    FieldCount {
        id: RecordId,
        expected: usize,
        found: usize,
    },

    #[error("Required column '{0}' is missing")]
    MissingColumn(String),

    #[error("No header line found (expected a line starting with '#')")]
    MissingHeader,
}

impl RecordError {
    /// True for errors scoped to a single row, which a pipeline may skip.
    pub fn is_row_level(&self) -> bool {
        matches!(
            self,
            RecordError::MalformedRecord { .. } | RecordError::FieldCount { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
