//! The wire format's field id table.
//!
//! The top-level layout is closed: adding a field id is a compile-time
//! change here plus an arm in the field mapper's dispatch. Ids the table
//! does not know are skipped by the mapper, which is what keeps decoding
//! forward compatible with future payload revisions.

/// A recognized top-level field id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// `00`: payload format indicator (encoding version of the payload).
    PayloadFormat,
    /// `01`: initiation method code (`"11"` static, `"12"` dynamic).
    InitiationMethod,
    /// `38`: merchant account composite, nesting the payee's bank and
    /// account identification.
    MerchantAccount,
    /// `52`: merchant category code.
    MerchantCategory,
    /// `53`: transaction currency code.
    Currency,
    /// `54`: transaction amount.
    Amount,
    /// `58`: country code.
    CountryCode,
    /// `62`: additional data composite (message, purpose, bill number).
    AdditionalData,
    /// `63`: checksum field.
    Crc,
}

impl FieldId {
    /// Look up a two-digit wire id. `None` means unknown/ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "00" => Some(FieldId::PayloadFormat),
            "01" => Some(FieldId::InitiationMethod),
            "38" => Some(FieldId::MerchantAccount),
            "52" => Some(FieldId::MerchantCategory),
            "53" => Some(FieldId::Currency),
            "54" => Some(FieldId::Amount),
            "58" => Some(FieldId::CountryCode),
            "62" => Some(FieldId::AdditionalData),
            "63" => Some(FieldId::Crc),
            _ => None,
        }
    }

    /// The two-digit wire id.
    pub fn code(self) -> &'static str {
        match self {
            FieldId::PayloadFormat => "00",
            FieldId::InitiationMethod => "01",
            FieldId::MerchantAccount => "38",
            FieldId::MerchantCategory => "52",
            FieldId::Currency => "53",
            FieldId::Amount => "54",
            FieldId::CountryCode => "58",
            FieldId::AdditionalData => "62",
            FieldId::Crc => "63",
        }
    }

    /// `true` for fields whose value is itself a nested TLV run.
    pub fn is_composite(self) -> bool {
        matches!(self, FieldId::MerchantAccount | FieldId::AdditionalData)
    }
}

/// Sub-ids inside the merchant account composite (`38`).
pub mod merchant_account {
    /// Globally unique scheme identifier of the payment network.
    pub const SCHEME_GUID: &str = "00";
    /// Payment-network-specific payload, itself a nested TLV run.
    pub const NETWORK_DATA: &str = "01";
    /// Bank identifier, inside the network payload.
    pub const BANK_ID: &str = "00";
    /// Account or card identifier, inside the network payload.
    pub const ACCOUNT_ID: &str = "01";
}

/// Sub-ids inside the additional data composite (`62`).
pub mod additional_data {
    /// Purpose-of-transaction code.
    pub const PURPOSE: &str = "07";
    /// Free-text message to the payee.
    pub const MESSAGE: &str = "08";
    /// Bill or invoice number.
    pub const BILL_NUMBER: &str = "09";
}
