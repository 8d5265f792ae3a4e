use super::triple::Triple;
use crate::error::DecodeError;
use payqr_toolchain_diagnostics::{Diagnostic, Span, codes};
use serde::Serialize;
use thiserror::Error;

/// Shorthand for building a `BTreeMap<String, String>` context from key-value pairs.
macro_rules! ctx {
    ($($k:expr => $v:expr),+ $(,)?) => {
        std::collections::BTreeMap::from([$(($k.into(), $v.into())),+])
    };
}

/// Fraction of a declared value that must be present for the declaration to
/// be trusted when the *first* field is cut short.
///
/// When the very first field's value is cut short, the scanner has no prior
/// structure to vouch for the payload. If at least this fraction of the
/// declared bytes is present the length declaration is trusted and the
/// shortfall is a hard [`DecodeError::ParseError`]; below it the declaration
/// itself is treated as unreliable and the scan stops softly with an empty,
/// corruption-flagged prefix. Once any complete field has been decoded,
/// truncation is always the soft path regardless of this ratio.
///
/// This is a tunable policy constant, not an algorithmic necessity.
pub const SALVAGE_RATIO: f64 = 0.5;

/// Result of scanning a payload into TLV triples.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    /// Complete triples, in wire order. Duplicate ids are preserved.
    pub triples: Vec<Triple>,
    /// `true` when the payload was cut off after the last complete triple
    /// and the sequence is a salvaged prefix rather than the whole payload.
    pub corrupted: bool,
    /// Warnings describing what was salvaged. Empty when `corrupted` is
    /// `false`.
    pub diagnostics: Vec<Diagnostic>,
}

/// A hard scan failure, carrying any triples decoded before the failure so
/// callers with a salvage policy can still use them.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{error}")]
pub struct ScanFailure {
    /// The failure itself.
    pub error: DecodeError,
    /// Complete triples decoded before the failure, in wire order.
    pub salvaged: Vec<Triple>,
}

impl From<ScanFailure> for DecodeError {
    fn from(failure: ScanFailure) -> Self {
        failure.error
    }
}

/// Scan a payload into an ordered TLV triple sequence.
///
/// Each field is two ASCII-digit characters of id, two ASCII-digit
/// characters of length, then exactly `length` UTF-8 **bytes** of value;
/// the cursor advances past the characters those bytes decode to, so a
/// multi-byte character is never split. Zero-length fields produce a triple
/// with an empty value.
///
/// Truncated input is salvaged when structure was already established: once
/// at least one field is complete, a cut-off header or value stops the scan
/// with `corrupted = true` instead of failing. Malformed header digits are
/// always a hard failure. See [`SALVAGE_RATIO`] for how a truncated *first*
/// field is classified.
pub fn tokenize(input: &str) -> Result<ScanOutcome, ScanFailure> {
    Scanner::new(input).scan()
}

// ─── Scan State Machine ─────────────────────────────────────────────────────

/// Terminal state of a scan pass. While none of these is reached the
/// scanner is implicitly in its scanning state, looping over fields.
enum Termination {
    /// Cursor reached end of input with every field complete.
    Done,
    /// The payload was cut off; the decoded prefix is usable.
    Truncated(Diagnostic),
    /// The envelope is invalid and no salvage policy applies.
    Malformed(DecodeError),
}

struct Scanner<'a> {
    input: &'a str,
    /// Byte cursor. Always on a character boundary.
    pos: usize,
    triples: Vec<Triple>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            triples: Vec::new(),
        }
    }

    fn scan(mut self) -> Result<ScanOutcome, ScanFailure> {
        match self.run() {
            Termination::Done => Ok(ScanOutcome {
                triples: self.triples,
                corrupted: false,
                diagnostics: Vec::new(),
            }),
            Termination::Truncated(diag) => Ok(ScanOutcome {
                triples: self.triples,
                corrupted: true,
                diagnostics: vec![diag],
            }),
            Termination::Malformed(error) => Err(ScanFailure {
                error,
                salvaged: self.triples,
            }),
        }
    }

    fn run(&mut self) -> Termination {
        if self.input.is_empty() {
            return Termination::Malformed(DecodeError::invalid_format("empty payload", Some(0)));
        }
        while self.pos < self.input.len() {
            if let Some(term) = self.step() {
                return term;
            }
        }
        Termination::Done
    }

    /// Decode one field at the cursor. Returns `None` to keep scanning.
    fn step(&mut self) -> Option<Termination> {
        let field_start = self.pos;
        let rest = &self.input[field_start..];

        // An id + length header needs four characters.
        if rest.chars().take(4).count() < 4 {
            return Some(self.truncated_header(field_start));
        }

        let id_end = char_prefix_len(rest, 2);
        let id = &rest[..id_end];
        if !is_digit_pair(id) {
            return Some(Termination::Malformed(DecodeError::invalid_format(
                format!("malformed field id {id:?}: expected two ASCII digits"),
                Some(field_start),
            )));
        }

        let len_end = id_end + char_prefix_len(&rest[id_end..], 2);
        let len_digits = &rest[id_end..len_end];
        if !is_digit_pair(len_digits) {
            return Some(Termination::Malformed(DecodeError::invalid_format(
                format!("malformed field length {len_digits:?}: expected two ASCII digits"),
                Some(field_start + id_end),
            )));
        }
        // Two ASCII digits: 0..=99.
        let d = len_digits.as_bytes();
        let declared = usize::from((d[0] - b'0') * 10 + (d[1] - b'0'));

        // The value is the next `declared` bytes, which must end on a
        // character boundary.
        let value_start = field_start + 4;
        let body = &self.input[value_start..];
        if declared <= body.len() && body.is_char_boundary(declared) {
            let value = &body[..declared];
            self.triples.push(Triple {
                id: id.to_string(),
                length: declared,
                value: value.to_string(),
                span: Span::new(field_start, value_start + declared),
            });
            self.pos = value_start + declared;
            return None;
        }

        Some(self.truncated_value(field_start, id, declared, body.len()))
    }

    /// Header expected but fewer than four characters remain.
    fn truncated_header(&self, field_start: usize) -> Termination {
        if self.triples.is_empty() {
            return Termination::Malformed(DecodeError::invalid_format(
                "incomplete payload: too short to hold a field header",
                Some(field_start),
            ));
        }
        Termination::Truncated(
            Diagnostic::warn(
                codes::SCAN_TRUNCATED_HEADER,
                "payload cut off inside a field header",
                Some(Span::new(field_start, self.input.len())),
            )
            .with_context(ctx!("offset" => field_start.to_string())),
        )
    }

    /// The declared length cannot be satisfied: either fewer bytes remain,
    /// or the declaration falls inside a multi-byte character.
    fn truncated_value(
        &self,
        field_start: usize,
        id: &str,
        declared: usize,
        available: usize,
    ) -> Termination {
        let (code, message) = if available >= declared {
            (
                codes::SCAN_SPLIT_CHARACTER,
                format!("field {id} length {declared} splits a multi-byte character"),
            )
        } else {
            (
                codes::SCAN_TRUNCATED_VALUE,
                format!("field {id} declares {declared} value bytes, {available} remain"),
            )
        };

        if !self.triples.is_empty() {
            return Termination::Truncated(
                Diagnostic::warn(code, message, Some(Span::new(field_start, self.input.len())))
                    .with_context(ctx!(
                        "field" => id,
                        "declared" => declared.to_string(),
                        "available" => available.to_string(),
                    )),
            );
        }

        // First field. `declared` is nonzero here: a zero declaration is
        // always satisfiable and never reaches this branch.
        let present = available as f64 / declared as f64;
        if present >= SALVAGE_RATIO {
            return Termination::Malformed(DecodeError::parse_error(message, Some(field_start)));
        }
        Termination::Truncated(
            Diagnostic::warn(code, message, Some(Span::new(field_start, self.input.len())))
                .with_context(ctx!(
                    "field" => id,
                    "declared" => declared.to_string(),
                    "available" => available.to_string(),
                )),
        )
    }
}

/// `true` when `s` is exactly two ASCII digits.
fn is_digit_pair(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Byte length of the first `n` characters of `s`.
///
/// `s` must contain at least `n` characters; the caller checks the count
/// before slicing the header.
fn char_prefix_len(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}
