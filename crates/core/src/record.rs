use serde::{Deserialize, Serialize};

/// How a payment request fixes its amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InitiationMethod {
    /// Reusable code; the payer enters the amount.
    Static,
    /// One-off code; the payee fixed the amount.
    Dynamic,
}

impl InitiationMethod {
    /// Recode the wire value of the initiation method field.
    ///
    /// `"11"` is static, `"12"` is dynamic; any other value is unknown and
    /// leaves the record's method unset.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "11" => Some(InitiationMethod::Static),
            "12" => Some(InitiationMethod::Dynamic),
            _ => None,
        }
    }
}

impl std::fmt::Display for InitiationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitiationMethod::Static => write!(f, "static"),
            InitiationMethod::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// Decoded payment fields, all optional.
///
/// Values are carried byte-for-byte as extracted from the payload, with no
/// trimming, no numeric coercion. Semantic checks (currency code validity,
/// bank-code format, checksum verification) belong to the downstream
/// validator, not to this record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentRecord {
    /// Payload format indicator (field `00`).
    pub payload_format: Option<String>,
    /// Initiation method (field `01`, recoded).
    pub initiation_method: Option<InitiationMethod>,
    /// Bank identifier (field `38`, network payload sub-id `00`).
    pub bank_id: Option<String>,
    /// Account or card identifier (field `38`, network payload sub-id `01`).
    pub account_id: Option<String>,
    /// Transaction amount (field `54`).
    pub amount: Option<String>,
    /// Currency code (field `53`).
    pub currency: Option<String>,
    /// Country code (field `58`).
    pub country: Option<String>,
    /// Merchant category code (field `52`).
    pub merchant_category: Option<String>,
    /// Free-text message (field `62`, sub-id `08`).
    pub message: Option<String>,
    /// Purpose-of-transaction code (field `62`, sub-id `07`).
    pub purpose: Option<String>,
    /// Bill or invoice number (field `62`, sub-id `09`).
    pub bill_number: Option<String>,
    /// Checksum field as carried in the payload (field `63`). Verification
    /// against a computed checksum is the downstream validator's job.
    pub crc: Option<String>,
}

/// Presence probe for one record field.
type FieldProbe = fn(&PaymentRecord) -> bool;

/// Strict-mode required fields, in reporting order.
const REQUIRED_FIELDS: &[(&str, FieldProbe)] = &[
    ("payload_format", |r| r.payload_format.is_some()),
    ("initiation_method", |r| r.initiation_method.is_some()),
    ("bank_id", |r| r.bank_id.is_some()),
    ("account_id", |r| r.account_id.is_some()),
    ("currency", |r| r.currency.is_some()),
    ("country", |r| r.country.is_some()),
    ("crc", |r| r.crc.is_some()),
];

impl PaymentRecord {
    /// `true` when no field at all was extracted.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Names of the strict-mode required fields this record is missing, in
    /// reporting order. Empty when the record satisfies a strict parse.
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .filter(|(_, present)| !present(self))
            .map(|(name, _)| *name)
            .collect()
    }
}
