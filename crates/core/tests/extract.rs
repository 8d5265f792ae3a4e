//! Tests for the field mapper.
//!
//! Covers: scalar dispatch, initiation recoding, last-occurrence-wins,
//! composite extraction at both nesting levels, silent branch aborts, and
//! forward compatibility with unknown ids.

mod common;

use common::{additional_value, field, merchant_value, triple};
use payqr_toolchain_core::{FieldId, InitiationMethod, extract_fields};

// ─── 1. Scalar dispatch ─────────────────────────────────────────────────────

#[test]
fn scalar_fields_pass_through() {
    let triples = [
        triple("00", "01"),
        triple("52", "5411"),
        triple("53", "704"),
        triple("54", "180000"),
        triple("58", "VN"),
        triple("63", "BEEF"),
    ];
    let record = extract_fields(&triples);
    assert_eq!(record.payload_format.as_deref(), Some("01"));
    assert_eq!(record.merchant_category.as_deref(), Some("5411"));
    assert_eq!(record.currency.as_deref(), Some("704"));
    assert_eq!(record.amount.as_deref(), Some("180000"));
    assert_eq!(record.country.as_deref(), Some("VN"));
    assert_eq!(record.crc.as_deref(), Some("BEEF"));
    assert!(record.initiation_method.is_none());
}

#[test]
fn values_are_not_trimmed_or_coerced() {
    let record = extract_fields(&[triple("54", " 0180000.00 ")]);
    assert_eq!(record.amount.as_deref(), Some(" 0180000.00 "));
}

#[test]
fn initiation_method_is_recoded() {
    let record = extract_fields(&[triple("01", "11")]);
    assert_eq!(record.initiation_method, Some(InitiationMethod::Static));

    let record = extract_fields(&[triple("01", "12")]);
    assert_eq!(record.initiation_method, Some(InitiationMethod::Dynamic));

    let record = extract_fields(&[triple("01", "99")]);
    assert!(
        record.initiation_method.is_none(),
        "unknown code leaves the method unset"
    );
}

#[test]
fn unknown_ids_yield_an_empty_record() {
    let triples = [triple("02", "a"), triple("47", "b"), triple("99", "c")];
    let record = extract_fields(&triples);
    assert!(record.is_empty(), "unknown ids are skipped, not errors");
}

#[test]
fn empty_sequence_yields_an_empty_record() {
    assert!(extract_fields(&[]).is_empty());
}

// ─── 2. Last occurrence wins ────────────────────────────────────────────────

#[test]
fn repeated_scalar_takes_the_later_value() {
    let triples = [triple("54", "100"), triple("53", "704"), triple("54", "250")];
    let record = extract_fields(&triples);
    assert_eq!(record.amount.as_deref(), Some("250"));
    assert_eq!(record.currency.as_deref(), Some("704"));
}

#[test]
fn later_unknown_initiation_code_does_not_clear_an_earlier_one() {
    let triples = [triple("01", "11"), triple("01", "77")];
    let record = extract_fields(&triples);
    assert_eq!(record.initiation_method, Some(InitiationMethod::Static));
}

#[test]
fn repeated_composite_overwrites_the_subfields_it_carries() {
    let first = [field("07", "DEBT"), field("09", "INV-1")].concat();
    let second = field("08", "hello");
    let triples = [triple("62", &first), triple("62", &second)];
    let record = extract_fields(&triples);
    assert_eq!(record.message.as_deref(), Some("hello"));
    assert_eq!(record.purpose.as_deref(), Some("DEBT"), "not carried again, kept");
    assert_eq!(record.bill_number.as_deref(), Some("INV-1"));
}

// ─── 3. Merchant account composite ──────────────────────────────────────────

#[test]
fn merchant_account_extracts_both_nesting_levels() {
    let record = extract_fields(&[triple("38", &merchant_value())]);
    assert_eq!(record.bank_id.as_deref(), Some("970415"));
    assert_eq!(record.account_id.as_deref(), Some("113366668888"));
}

#[test]
fn merchant_account_without_network_payload_is_skipped() {
    // Only the scheme GUID sub-field, no sub-id 01.
    let value = field("00", "A000000727");
    let record = extract_fields(&[triple("38", &value), triple("58", "VN")]);
    assert!(record.bank_id.is_none());
    assert!(record.account_id.is_none());
    assert_eq!(record.country.as_deref(), Some("VN"), "other fields unaffected");
}

#[test]
fn unparseable_merchant_account_aborts_that_branch_only() {
    let record = extract_fields(&[triple("38", "garbage!"), triple("53", "704")]);
    assert!(record.bank_id.is_none());
    assert!(record.account_id.is_none());
    assert_eq!(record.currency.as_deref(), Some("704"));
}

#[test]
fn unparseable_network_payload_aborts_that_branch_only() {
    // Outer level scans, the nested network payload does not.
    let value = field("01", "XX");
    let record = extract_fields(&[triple("38", &value), triple("53", "704")]);
    assert!(record.bank_id.is_none());
    assert_eq!(record.currency.as_deref(), Some("704"));
}

#[test]
fn network_payload_may_carry_only_a_bank_id() {
    let network = field("00", "970422");
    let value = field("01", &network);
    let record = extract_fields(&[triple("38", &value)]);
    assert_eq!(record.bank_id.as_deref(), Some("970422"));
    assert!(record.account_id.is_none());
}

// ─── 4. Additional data composite ───────────────────────────────────────────

#[test]
fn additional_data_extracts_known_subfields() {
    let value = [
        field("07", "BILLPAY"),
        field("08", "an lanh"),
        field("09", "NO-42"),
    ]
    .concat();
    let record = extract_fields(&[triple("62", &value)]);
    assert_eq!(record.purpose.as_deref(), Some("BILLPAY"));
    assert_eq!(record.message.as_deref(), Some("an lanh"));
    assert_eq!(record.bill_number.as_deref(), Some("NO-42"));
}

#[test]
fn additional_data_ignores_unknown_subids() {
    let value = [field("01", "x"), field("08", "hi"), field("64", "y")].concat();
    let record = extract_fields(&[triple("62", &value)]);
    assert_eq!(record.message.as_deref(), Some("hi"));
    assert!(record.purpose.is_none());
    assert!(record.bill_number.is_none());
}

#[test]
fn additional_data_message_survives_byte_for_byte() {
    let message = "Cà phê ☕ 100%";
    let record = extract_fields(&[triple("62", &additional_value(message))]);
    assert_eq!(record.message.as_deref(), Some(message));
}

#[test]
fn repeated_subid_in_a_composite_takes_the_last() {
    let value = [field("08", "first"), field("08", "second")].concat();
    let record = extract_fields(&[triple("62", &value)]);
    assert_eq!(record.message.as_deref(), Some("second"));
}

// ─── 5. Field id table ──────────────────────────────────────────────────────

#[test]
fn field_id_codes_round_trip() {
    for id in [
        FieldId::PayloadFormat,
        FieldId::InitiationMethod,
        FieldId::MerchantAccount,
        FieldId::MerchantCategory,
        FieldId::Currency,
        FieldId::Amount,
        FieldId::CountryCode,
        FieldId::AdditionalData,
        FieldId::Crc,
    ] {
        assert_eq!(FieldId::from_code(id.code()), Some(id));
    }
    assert_eq!(FieldId::from_code("99"), None);
}

#[test]
fn only_the_two_composites_nest() {
    assert!(FieldId::MerchantAccount.is_composite());
    assert!(FieldId::AdditionalData.is_composite());
    assert!(!FieldId::Currency.is_composite());
}

#[test]
fn initiation_method_displays_its_wire_meaning() {
    assert_eq!(InitiationMethod::Static.to_string(), "static");
    assert_eq!(InitiationMethod::Dynamic.to_string(), "dynamic");
}

// ─── 6. Required-field reporting ────────────────────────────────────────────

#[test]
fn missing_required_lists_all_seven_on_an_empty_record() {
    let record = extract_fields(&[]);
    assert_eq!(
        record.missing_required(),
        vec![
            "payload_format",
            "initiation_method",
            "bank_id",
            "account_id",
            "currency",
            "country",
            "crc",
        ]
    );
}

#[test]
fn missing_required_is_empty_for_a_full_record() {
    let triples = [
        triple("00", "01"),
        triple("01", "12"),
        triple("38", &merchant_value()),
        triple("53", "704"),
        triple("58", "VN"),
        triple("63", "BEEF"),
    ];
    let record = extract_fields(&triples);
    assert!(record.missing_required().is_empty(), "{:?}", record);
}
