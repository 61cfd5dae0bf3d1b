//! Builders for ledger events used across the test modules.

use stellar_strkey::{ed25519, Contract};

use crate::ledger::events::{
    AccountEffect, ContractEvent, Int128Parts, LedgerRef, PaymentOperation, ScAddress, ScVal,
};

pub const CLOSED_AT: &str = "2024-03-01T12:00:00Z";
pub const TOKEN_CONTRACT: &str = "CDLZFC3SYJYDZT7K67VZ75HPJVIEUVNIXF47ZG2FB2RMQQVU2HHGCYSC";

pub fn account_key(byte: u8) -> [u8; 32] {
    [byte; 32]
}

/// Strkey of the test account built from `byte`, as it appears on chain.
pub fn g_address(byte: u8) -> String {
    ed25519::PublicKey(account_key(byte)).to_string()
}

pub fn c_address(byte: u8) -> String {
    Contract([byte; 32]).to_string()
}

pub fn account_val(byte: u8) -> ScVal {
    ScVal::Address(ScAddress::Account(account_key(byte).to_vec()))
}

pub fn contract_val(byte: u8) -> ScVal {
    ScVal::Address(ScAddress::Contract(vec![byte; 32]))
}

pub fn payment(id: &str, from: &str, to: &str, ledger: u32) -> PaymentOperation {
    PaymentOperation {
        id: id.to_string(),
        operation_type: "payment".to_string(),
        from: from.to_string(),
        to: to.to_string(),
        ledger: LedgerRef { sequence: ledger },
        transaction_hash: format!("hash-{id}"),
        amount: "25.0000000".to_string(),
    }
}

pub fn credit(id: &str, account: &str, ledger: u32) -> AccountEffect {
    AccountEffect {
        id: id.to_string(),
        effect_type: "account_credited".to_string(),
        account: account.to_string(),
        ledger: LedgerRef { sequence: ledger },
        amount: "10.0000000".to_string(),
    }
}

pub fn debit(id: &str, account: &str, ledger: u32) -> AccountEffect {
    AccountEffect {
        effect_type: "account_debited".to_string(),
        ..credit(id, account, ledger)
    }
}

pub fn transfer_event(id: &str, from: ScVal, to: ScVal, amount: i128, ledger: u32) -> ContractEvent {
    ContractEvent {
        id: id.to_string(),
        ledger: LedgerRef { sequence: ledger },
        ledger_closed_at: CLOSED_AT.to_string(),
        contract_id: TOKEN_CONTRACT.to_string(),
        topic: vec![ScVal::Symbol("transfer".to_string()), from, to],
        value: ScVal::I128(Int128Parts::from(amount)),
    }
}
