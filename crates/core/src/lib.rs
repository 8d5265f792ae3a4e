//! payqr toolchain core library.
//!
//! Decodes domestic payment QR payloads (EMV-QR-derived Tag-Length-Value
//! text) into structured [`PaymentRecord`]s, salvaging the structurally
//! sound prefix of truncated or corrupted input. The main entry points are
//! [`parse_str`] / [`parse_with_options`] for full decoding and
//! [`tokenize`] for raw TLV scanning.

#![warn(missing_docs)]

/// Re-exports from the diagnostics crate.
pub mod diag;
/// JSON serialization helpers for decoded records.
pub mod dump;
/// Failure type returned by the scanner and orchestrator.
pub mod error;
/// Field mapper: interprets TLV triples as a payment record.
pub mod extract;
/// Closed table of top-level and composite field ids.
pub mod fields;
/// Parse orchestrator: length gate, scan, map, strictness policy.
pub mod parse;
/// Payment record types.
pub mod record;
/// TLV envelope: triples and the scanner.
pub mod tlv;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Orchestrator
pub use parse::{
    DEFAULT_MAX_LENGTH, ParseOptions, ParseOutcome, ParseResult, parse_str, parse_with_options,
};

// Scanner
pub use tlv::scanner::{SALVAGE_RATIO, ScanFailure, ScanOutcome, tokenize};

// Triples
pub use tlv::triple::Triple;

// Field mapper
pub use extract::extract_fields;
pub use fields::FieldId;
pub use record::{InitiationMethod, PaymentRecord};

// Errors
pub use error::{DecodeError, ErrorKind};

// Diagnostics (re-exported from the diagnostics crate)
pub use diag::{Diagnostic, Severity, Span, codes};

// Serialization helpers
pub use dump::to_pretty_json;
