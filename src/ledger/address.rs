//! Decoding of address values found in contract event topics.
//!
//! Soroban addresses come in two flavours: classic accounts (an ed25519 key,
//! `G…` strkey) and contracts (a 32 byte id, `C…` strkey). A topic entry may
//! carry either the structured form or an already-encoded strkey string, so
//! decoding tries the account reading first and then the contract reading.

use std::fmt;

use stellar_strkey::{ed25519, Contract};
use thiserror::Error;

use super::events::{ScAddress, ScVal};

const PAYLOAD_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalAddress {
    Account(String),
    Contract(String),
}

impl CanonicalAddress {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Account(id) | Self::Contract(id) => id,
        }
    }

    pub fn is_contract(&self) -> bool {
        matches!(self, Self::Contract(_))
    }
}

impl fmt::Display for CanonicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected an address, found {0} value")]
    NotAnAddress(&'static str),

    #[error("{kind} address payload has {actual} bytes, expected 32")]
    InvalidLength { kind: &'static str, actual: usize },

    #[error("not an account or contract strkey: {0}")]
    InvalidStrkey(String),
}

/// Decodes a topic value into an account or contract address.
pub fn decode_address(raw: &ScVal) -> Result<CanonicalAddress, DecodeError> {
    if let Some(key) = account_key(raw) {
        return Ok(CanonicalAddress::Account(ed25519::PublicKey(key).to_string()));
    }
    if let Some(id) = contract_id(raw) {
        return Ok(CanonicalAddress::Contract(Contract(id).to_string()));
    }
    Err(failure(raw))
}

fn account_key(raw: &ScVal) -> Option<[u8; PAYLOAD_LEN]> {
    match raw {
        ScVal::Address(ScAddress::Account(bytes)) => bytes.as_slice().try_into().ok(),
        ScVal::String(s) | ScVal::Symbol(s) => ed25519::PublicKey::from_string(s).ok().map(|pk| pk.0),
        _ => None,
    }
}

fn contract_id(raw: &ScVal) -> Option<[u8; PAYLOAD_LEN]> {
    match raw {
        ScVal::Address(ScAddress::Contract(bytes)) => bytes.as_slice().try_into().ok(),
        ScVal::String(s) | ScVal::Symbol(s) => Contract::from_string(s).ok().map(|c| c.0),
        _ => None,
    }
}

fn failure(raw: &ScVal) -> DecodeError {
    match raw {
        ScVal::Address(ScAddress::Account(bytes)) => DecodeError::InvalidLength {
            kind: "account",
            actual: bytes.len(),
        },
        ScVal::Address(ScAddress::Contract(bytes)) => DecodeError::InvalidLength {
            kind: "contract",
            actual: bytes.len(),
        },
        ScVal::String(s) | ScVal::Symbol(s) => DecodeError::InvalidStrkey(s.clone()),
        other => DecodeError::NotAnAddress(other.type_name()),
    }
}
