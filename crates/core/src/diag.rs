//! Re-exports of the diagnostics crate types used throughout the core.

pub use payqr_toolchain_diagnostics::{Diagnostic, Severity, Span, codes, explain};
