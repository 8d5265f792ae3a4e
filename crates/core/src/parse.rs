use crate::error::DecodeError;
use crate::extract::extract_fields;
use crate::record::PaymentRecord;
use crate::tlv::scanner::{ScanFailure, tokenize};
use payqr_toolchain_diagnostics::{Diagnostic, Span, codes};
use serde::Serialize;

/// Default payload ceiling, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 4096;

/// Policy knobs for one parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Require the full field set and an uncorrupted scan.
    pub strict_mode: bool,
    /// When the scan fails or required fields are missing, salvage whatever
    /// partial record can still be extracted instead of failing.
    pub extract_partial_on_error: bool,
    /// Payload ceiling in characters. Also the only work bound a caller
    /// needs: one call is O(payload length) with no suspension points.
    pub max_length: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict_mode: false,
            extract_partial_on_error: false,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

/// Result of a successful parse.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    /// The decoded record; partial when the payload was.
    pub record: PaymentRecord,
    /// `true` when the record reflects a salvaged prefix of a truncated or
    /// corrupted payload. Whether that is acceptable is the caller's call.
    pub corrupted: bool,
    /// Scanner warnings describing what was salvaged.
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of a parse call: a decoded result or a failure value.
pub type ParseOutcome = Result<ParseResult, DecodeError>;

/// Parse a payment QR payload with default options.
pub fn parse_str(input: &str) -> ParseOutcome {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse a payment QR payload into a structured record.
///
/// Moves linearly through length check → scan → field extraction → policy
/// check. No state survives the call, so concurrent calls need no
/// synchronization.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> ParseOutcome {
    if input.is_empty() {
        return Err(DecodeError::invalid_format("empty payload", Some(0)));
    }
    let length = input.chars().count();
    if length > options.max_length {
        return Err(DecodeError::LengthExceeded {
            length,
            limit: options.max_length,
        });
    }

    let scan = match tokenize(input) {
        Ok(scan) => scan,
        Err(ScanFailure { error, salvaged }) => {
            if options.extract_partial_on_error && !salvaged.is_empty() {
                // Structure was established before the hard failure:
                // salvage supersedes the policy gates below.
                let note = Diagnostic::warn(
                    codes::PARSE_SALVAGED,
                    error.to_string(),
                    error.offset().map(Span::empty),
                );
                return Ok(ParseResult {
                    record: extract_fields(&salvaged),
                    corrupted: true,
                    diagnostics: vec![note],
                });
            }
            return Err(error);
        }
    };

    let record = extract_fields(&scan.triples);

    if options.strict_mode {
        let missing = record.missing_required();
        if !missing.is_empty() {
            return Err(DecodeError::invalid_format(
                format!("missing required fields: {}", missing.join(", ")),
                None,
            ));
        }
        if scan.corrupted {
            return Err(DecodeError::invalid_format(
                "corrupted payload: truncated after the last complete field",
                None,
            ));
        }
    } else if record.payload_format.is_none() || record.initiation_method.is_none() {
        let salvage = options.extract_partial_on_error && !record.is_empty();
        if !salvage {
            let mut missing = Vec::new();
            if record.payload_format.is_none() {
                missing.push("payload_format");
            }
            if record.initiation_method.is_none() {
                missing.push("initiation_method");
            }
            return Err(DecodeError::invalid_format(
                format!("missing required fields: {}", missing.join(", ")),
                None,
            ));
        }
    }

    Ok(ParseResult {
        record,
        corrupted: scan.corrupted,
        diagnostics: scan.diagnostics,
    })
}
