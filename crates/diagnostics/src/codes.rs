//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete. Codes are stable once published; new codes are
//! appended, never renumbered.

/// A field header was expected but fewer than four characters remained.
pub const SCAN_TRUNCATED_HEADER: &str = "PQR1101";

/// A declared value length exceeded the bytes remaining in the payload.
pub const SCAN_TRUNCATED_VALUE: &str = "PQR1102";

/// A declared value length would split a multi-byte character.
pub const SCAN_SPLIT_CHARACTER: &str = "PQR1103";

/// A hard scan failure was downgraded to a partial record on request.
pub const PARSE_SALVAGED: &str = "PQR1201";
