//! TLV envelope handling.
//!
//! A payment QR payload is a flat run of `id` + `length` + value fields in
//! which two composite fields nest further TLV runs inside their values.
//! This module owns the wire-level view: [`triple::Triple`] is one decoded
//! field, [`scanner`] turns payload text into an ordered triple sequence
//! under the truncation-salvage policy.

/// The TLV scanner and its outcome types.
pub mod scanner;
/// Decoded TLV field types.
pub mod triple;
