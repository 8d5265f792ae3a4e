//! Shared test helpers for `payqr_toolchain_core` integration tests.

#![allow(unreachable_pub)]

use payqr_toolchain_core::{Span, Triple};

/// Encode one TLV field: two-digit id, two-digit byte length, value.
#[allow(dead_code)]
pub fn field(id: &str, value: &str) -> String {
    assert!(
        value.len() <= 99,
        "test field value too long: {} bytes",
        value.len()
    );
    format!("{id}{:02}{value}", value.len())
}

/// A triple literal for mapper tests, where spans are irrelevant.
#[allow(dead_code)]
pub fn triple(id: &str, value: &str) -> Triple {
    Triple::new(id, value, Span::empty(0))
}

/// The nested merchant account value: scheme GUID, then the network
/// payload carrying bank id `970415` and account id `113366668888`.
#[allow(dead_code)]
pub fn merchant_value() -> String {
    let network = format!("{}{}", field("00", "970415"), field("01", "113366668888"));
    format!("{}{}", field("00", "A000000727"), field("01", &network))
}

/// The nested additional data value with a free-text message.
#[allow(dead_code)]
pub fn additional_value(message: &str) -> String {
    field("08", message)
}

/// A full, well-formed payload covering fields 00, 01, 38, 53, 54, 58, 62,
/// and 63, with a dynamic initiation code.
#[allow(dead_code)]
pub fn sample_payload(message: &str) -> String {
    [
        field("00", "01"),
        field("01", "12"),
        field("38", &merchant_value()),
        field("53", "704"),
        field("54", "180000"),
        field("58", "VN"),
        field("62", &additional_value(message)),
        field("63", "AB04"),
    ]
    .concat()
}
