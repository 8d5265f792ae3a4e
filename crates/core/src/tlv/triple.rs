use payqr_toolchain_diagnostics::Span;
use serde::{Deserialize, Serialize};

/// One decoded TLV field: a two-digit id, a declared byte length, and the
/// value text.
///
/// `length` records the wire declaration. The scanner never emits a triple
/// whose value was cut short, so for every `Triple` it produces `length`
/// equals `value.len()`; the field exists so a re-serialized triple matches
/// the wire byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Triple {
    /// Two-ASCII-digit field id (e.g., `"38"`). Duplicates are legal at
    /// this level; the field mapper applies last-occurrence-wins.
    pub id: String,
    /// Declared UTF-8 byte count of `value`.
    pub length: usize,
    /// The field's text content, preserved byte-for-byte.
    pub value: String,
    /// Byte range of the whole field (header and value) in the scanned
    /// text. For nested composite scans, relative to the nested value.
    pub span: Span,
}

impl Triple {
    /// Build a triple whose declared length is the value's byte count.
    pub fn new(id: impl Into<String>, value: impl Into<String>, span: Span) -> Self {
        let value = value.into();
        Self {
            id: id.into(),
            length: value.len(),
            value,
            span,
        }
    }
}
