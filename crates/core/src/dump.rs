use crate::record::PaymentRecord;

/// Serialize a payment record to a pretty-printed JSON string.
pub fn to_pretty_json(record: &PaymentRecord) -> String {
    serde_json::to_string_pretty(record).expect("PaymentRecord serialization cannot fail")
}
