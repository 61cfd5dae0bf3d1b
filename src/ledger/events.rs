//! Normalized ledger events as delivered by the ingestion driver.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRef {
    pub sequence: u32,
}

/// A classic `payment` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOperation {
    pub id: String,
    #[serde(rename = "type", default = "default_operation_type")]
    pub operation_type: String,
    pub from: String,
    pub to: String,
    pub ledger: LedgerRef,
    pub transaction_hash: String,
    pub amount: String,
}

/// An `account_credited` or `account_debited` effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEffect {
    pub id: String,
    #[serde(rename = "type", default)]
    pub effect_type: String,
    pub account: String,
    pub ledger: LedgerRef,
    pub amount: String,
}

/// A Soroban contract event carrying a token transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractEvent {
    pub id: String,
    pub ledger: LedgerRef,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: String,
    #[serde(rename = "contractId")]
    pub contract_id: String,
    pub topic: Vec<ScVal>,
    pub value: ScVal,
}

/// One event of each kind the handlers understand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEvent {
    Payment(PaymentOperation),
    Credit(AccountEffect),
    Debit(AccountEffect),
    Transfer(ContractEvent),
}

impl LedgerEvent {
    pub fn id(&self) -> &str {
        match self {
            Self::Payment(op) => &op.id,
            Self::Credit(effect) | Self::Debit(effect) => &effect.id,
            Self::Transfer(event) => &event.id,
        }
    }

    pub fn ledger_sequence(&self) -> u32 {
        match self {
            Self::Payment(op) => op.ledger.sequence,
            Self::Credit(effect) | Self::Debit(effect) => effect.ledger.sequence,
            Self::Transfer(event) => event.ledger.sequence,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Payment(_) => "payment",
            Self::Credit(_) => "credit",
            Self::Debit(_) => "debit",
            Self::Transfer(_) => "transfer",
        }
    }
}

fn default_operation_type() -> String {
    "payment".to_string()
}

/// Subset of the Soroban value union that appears in token events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScVal {
    Bool(bool),
    Void,
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    U128(UInt128Parts),
    I128(Int128Parts),
    Bytes(#[serde(with = "hex_bytes")] Vec<u8>),
    String(String),
    Symbol(String),
    Address(ScAddress),
    Vec(Vec<ScVal>),
}

impl ScVal {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Void => "void",
            Self::U32(_) => "u32",
            Self::I32(_) => "i32",
            Self::U64(_) => "u64",
            Self::I64(_) => "i64",
            Self::U128(_) => "u128",
            Self::I128(_) => "i128",
            Self::Bytes(_) => "bytes",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Address(_) => "address",
            Self::Vec(_) => "vec",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScAddress {
    /// Raw ed25519 public key of a classic account.
    Account(#[serde(with = "hex_bytes")] Vec<u8>),
    /// Raw contract id hash.
    Contract(#[serde(with = "hex_bytes")] Vec<u8>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UInt128Parts {
    pub hi: u64,
    pub lo: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Int128Parts {
    pub hi: i64,
    pub lo: u64,
}

impl From<u128> for UInt128Parts {
    fn from(v: u128) -> Self {
        Self {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

impl From<UInt128Parts> for u128 {
    fn from(parts: UInt128Parts) -> Self {
        ((parts.hi as u128) << 64) | parts.lo as u128
    }
}

impl From<i128> for Int128Parts {
    fn from(v: i128) -> Self {
        Self {
            hi: (v >> 64) as i64,
            lo: v as u64,
        }
    }
}

impl From<Int128Parts> for i128 {
    fn from(parts: Int128Parts) -> Self {
        ((parts.hi as i128) << 64) | parts.lo as i128
    }
}

mod hex_bytes {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        hex::decode(raw.trim_start_matches("0x")).map_err(D::Error::custom)
    }
}
