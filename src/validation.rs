use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::ledger::events::{AccountEffect, ContractEvent, PaymentOperation, ScVal};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Event {0} has ledger sequence 0")]
    ZeroLedgerSequence(String),

    #[error("Transfer topic must have 3 entries, found {0}")]
    TopicArity(usize),

    #[error("Invalid ledger close time: {0}")]
    InvalidCloseTime(String),

    #[error("Transfer value must be numeric, found {0}")]
    NonNumericValue(&'static str),

    #[error("Invalid integer literal: {0}")]
    InvalidInteger(String),
}

pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub fn validate_ledger_sequence(event_id: &str, sequence: u32) -> Result<(), ValidationError> {
    if sequence == 0 {
        return Err(ValidationError::ZeroLedgerSequence(event_id.to_string()));
    }
    Ok(())
}

pub fn validate_payment(op: &PaymentOperation) -> Result<(), ValidationError> {
    validate_required("id", &op.id)?;
    validate_required("from", &op.from)?;
    validate_required("to", &op.to)?;
    validate_ledger_sequence(&op.id, op.ledger.sequence)
}

pub fn validate_effect(effect: &AccountEffect) -> Result<(), ValidationError> {
    validate_required("id", &effect.id)?;
    validate_required("account", &effect.account)?;
    validate_ledger_sequence(&effect.id, effect.ledger.sequence)
}

pub fn validate_contract_event(event: &ContractEvent) -> Result<(), ValidationError> {
    validate_required("id", &event.id)?;
    validate_required("contractId", &event.contract_id)?;
    validate_ledger_sequence(&event.id, event.ledger.sequence)
}

/// Splits a transfer topic into `(environment, from, to)`.
pub fn transfer_topic(topic: &[ScVal]) -> Result<(&ScVal, &ScVal, &ScVal), ValidationError> {
    match topic {
        [env, from, to] => Ok((env, from, to)),
        _ => Err(ValidationError::TopicArity(topic.len())),
    }
}

pub fn parse_close_time(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| ValidationError::InvalidCloseTime(raw.to_string()))
}
