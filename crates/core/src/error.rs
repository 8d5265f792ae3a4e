use serde::Serialize;
use thiserror::Error;

/// A failed decode, returned as data by the scanner and the orchestrator.
///
/// Every variant is a terminal outcome of one `parse` or `tokenize` call;
/// nothing is retried or cached. Structurally empty-but-well-formed input
/// (all-unknown field ids) is not an error; it decodes to an empty record.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum DecodeError {
    /// The payload envelope is structurally wrong: empty input, a field id
    /// or length that is not two ASCII digits, a payload too short to hold
    /// one field header, or required fields missing from the final record.
    #[error("{message}")]
    InvalidFormat {
        /// Human-readable description of the defect.
        message: String,
        /// Byte offset of the defect in the payload, where one applies.
        #[serde(skip_serializing_if = "Option::is_none")]
        offset: Option<usize>,
    },

    /// A declared value length cannot be satisfied by the bytes remaining
    /// and no salvage policy applies.
    #[error("{message}")]
    ParseError {
        /// Human-readable description of the shortfall.
        message: String,
        /// Byte offset of the start of the unsatisfiable field.
        #[serde(skip_serializing_if = "Option::is_none")]
        offset: Option<usize>,
    },

    /// The payload is longer than the configured ceiling.
    #[error("payload is {length} characters, limit is {limit}")]
    LengthExceeded {
        /// Character count of the rejected payload.
        length: usize,
        /// The configured ceiling it exceeded.
        limit: usize,
    },
}

impl DecodeError {
    pub(crate) fn invalid_format(message: impl Into<String>, offset: Option<usize>) -> Self {
        DecodeError::InvalidFormat {
            message: message.into(),
            offset,
        }
    }

    pub(crate) fn parse_error(message: impl Into<String>, offset: Option<usize>) -> Self {
        DecodeError::ParseError {
            message: message.into(),
            offset,
        }
    }

    /// The error's class, for callers that dispatch on kind alone.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            DecodeError::ParseError { .. } => ErrorKind::ParseError,
            DecodeError::LengthExceeded { .. } => ErrorKind::LengthExceeded,
        }
    }

    /// Byte offset of the defect in the scanned text, where one applies.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::InvalidFormat { offset, .. } | DecodeError::ParseError { offset, .. } => {
                *offset
            }
            DecodeError::LengthExceeded { .. } => None,
        }
    }
}

/// Class of a [`DecodeError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Structurally wrong envelope or missing required fields.
    InvalidFormat,
    /// Unsatisfiable declared value length.
    ParseError,
    /// Payload longer than the configured ceiling.
    LengthExceeded,
}
