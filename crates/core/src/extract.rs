//! Field mapper: interprets a TLV triple sequence as a payment record.
//!
//! A total function over any triple sequence: unknown ids are skipped and
//! composite branches that fail to scan are abandoned silently, so a record
//! (possibly empty) always comes back. Composite values re-enter the same
//! scanner that produced the top-level triples; there is no second scan
//! implementation.

use crate::fields::{FieldId, additional_data, merchant_account};
use crate::record::{InitiationMethod, PaymentRecord};
use crate::tlv::scanner::tokenize;
use crate::tlv::triple::Triple;

/// Fold a triple sequence into a partial payment record.
///
/// Triples are applied in sequence order, so a repeated top-level id
/// overwrites what an earlier occurrence set: last occurrence wins.
pub fn extract_fields(triples: &[Triple]) -> PaymentRecord {
    triples.iter().fold(PaymentRecord::default(), apply)
}

/// Apply one top-level triple to the record.
fn apply(mut record: PaymentRecord, triple: &Triple) -> PaymentRecord {
    match FieldId::from_code(&triple.id) {
        Some(FieldId::PayloadFormat) => record.payload_format = Some(triple.value.clone()),
        Some(FieldId::InitiationMethod) => {
            // An unknown code leaves the method as it was.
            if let Some(method) = InitiationMethod::from_code(&triple.value) {
                record.initiation_method = Some(method);
            }
        }
        Some(FieldId::MerchantAccount) => {
            if let Some(account) = merchant_branch(&triple.value) {
                if let Some(bank_id) = account.bank_id {
                    record.bank_id = Some(bank_id);
                }
                if let Some(account_id) = account.account_id {
                    record.account_id = Some(account_id);
                }
            }
        }
        Some(FieldId::MerchantCategory) => record.merchant_category = Some(triple.value.clone()),
        Some(FieldId::Currency) => record.currency = Some(triple.value.clone()),
        Some(FieldId::Amount) => record.amount = Some(triple.value.clone()),
        Some(FieldId::CountryCode) => record.country = Some(triple.value.clone()),
        Some(FieldId::AdditionalData) => {
            if let Some(extra) = additional_branch(&triple.value) {
                if let Some(message) = extra.message {
                    record.message = Some(message);
                }
                if let Some(purpose) = extra.purpose {
                    record.purpose = Some(purpose);
                }
                if let Some(bill_number) = extra.bill_number {
                    record.bill_number = Some(bill_number);
                }
            }
        }
        Some(FieldId::Crc) => record.crc = Some(triple.value.clone()),
        // Unknown id: skipped, forward compatible.
        None => {}
    }
    record
}

/// Bank and account ids recovered from the merchant account composite.
struct MerchantAccount {
    bank_id: Option<String>,
    account_id: Option<String>,
}

/// Walk the two nesting levels of the merchant account field.
///
/// The composite nests the payment-network payload under sub-id `01`;
/// inside that payload, `00` is the bank id and `01` the account id. A hard
/// scan failure at either level abandons this branch only; a soft-corrupted
/// nested scan still contributes the sub-fields it salvaged.
fn merchant_branch(value: &str) -> Option<MerchantAccount> {
    let outer = tokenize(value).ok()?;
    let network = find_last(&outer.triples, merchant_account::NETWORK_DATA)?;
    let inner = tokenize(&network.value).ok()?;
    Some(MerchantAccount {
        bank_id: find_last(&inner.triples, merchant_account::BANK_ID).map(|t| t.value.clone()),
        account_id: find_last(&inner.triples, merchant_account::ACCOUNT_ID)
            .map(|t| t.value.clone()),
    })
}

/// Free-text and reference sub-fields from the additional data composite.
struct AdditionalData {
    message: Option<String>,
    purpose: Option<String>,
    bill_number: Option<String>,
}

fn additional_branch(value: &str) -> Option<AdditionalData> {
    let triples = tokenize(value).ok()?.triples;
    Some(AdditionalData {
        message: find_last(&triples, additional_data::MESSAGE).map(|t| t.value.clone()),
        purpose: find_last(&triples, additional_data::PURPOSE).map(|t| t.value.clone()),
        bill_number: find_last(&triples, additional_data::BILL_NUMBER).map(|t| t.value.clone()),
    })
}

/// Last occurrence of `id`, so repeated sub-ids resolve the same way
/// repeated top-level ids do.
fn find_last<'a>(triples: &'a [Triple], id: &str) -> Option<&'a Triple> {
    triples.iter().rfind(|t| t.id == id)
}
