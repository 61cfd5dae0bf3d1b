//! Event handlers: one ledger event in, a fixed set of entity writes out.
//!
//! Every handler validates and resolves before it writes anything, so a
//! decode or validation failure leaves the store untouched. The writes of
//! one event target distinct keys and are issued together.

mod effect;
mod payment;
mod transfer;

pub use effect::{handle_credit, handle_debit};
pub use payment::handle_operation;
pub use transfer::handle_event_mainnet;

use futures::future::{join_all, BoxFuture};
use tracing::{error, warn};

use crate::error::IndexerError;
use crate::ledger::LedgerEvent;
use crate::models::{Credit, Debit, Payment, Transfer};
use crate::resolver::ResolvedAccounts;
use crate::store::{EntityStore, StoreError};

/// The record an event was turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexedRecord {
    Payment(Payment),
    Credit(Credit),
    Debit(Debit),
    Transfer(Transfer),
}

impl IndexedRecord {
    pub fn id(&self) -> &str {
        match self {
            Self::Payment(p) => &p.id,
            Self::Credit(c) => &c.id,
            Self::Debit(d) => &d.id,
            Self::Transfer(t) => &t.id,
        }
    }
}

/// Routes an event to its handler.
pub async fn handle_event<S>(store: &S, event: &LedgerEvent) -> Result<IndexedRecord, IndexerError>
where
    S: EntityStore + ?Sized,
{
    match event {
        LedgerEvent::Payment(op) => handle_operation(store, op).await.map(IndexedRecord::Payment),
        LedgerEvent::Credit(effect) => handle_credit(store, effect).await.map(IndexedRecord::Credit),
        LedgerEvent::Debit(effect) => handle_debit(store, effect).await.map(IndexedRecord::Debit),
        LedgerEvent::Transfer(event) => handle_event_mainnet(store, event)
            .await
            .map(IndexedRecord::Transfer),
    }
}

type Write<'a> = BoxFuture<'a, Result<(), StoreError>>;

/// Moves the watermarks of all touched accounts to the event's ledger.
fn bump_watermarks(resolved: &mut ResolvedAccounts, event_id: &str, ledger_sequence: u32) {
    // Precondition: ledgers arrive in order. A lagging event keeps the stored
    // watermark rather than rewinding it.
    for account_id in resolved.observe(ledger_sequence) {
        warn!(
            "Event {} at ledger {} is behind the watermark of account {}; ledgers delivered out of order",
            event_id, ledger_sequence, account_id
        );
    }
}

fn account_writes<'a, S>(store: &'a S, resolved: &'a ResolvedAccounts) -> Vec<Write<'a>>
where
    S: EntityStore + ?Sized,
{
    resolved
        .accounts()
        .iter()
        .map(|account| store.save_account(account))
        .collect()
}

/// Runs all writes of one event to completion and reports the first failure.
async fn persist(event_id: &str, writes: Vec<Write<'_>>) -> Result<(), IndexerError> {
    let total = writes.len();
    let failures: Vec<StoreError> = join_all(writes)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect();

    if !failures.is_empty() {
        for e in &failures {
            error!("Event {}: write failed: {}", event_id, e);
        }
        warn!("Event {}: {} of {} writes failed", event_id, failures.len(), total);
    }

    failures.into_iter().next().map_or(Ok(()), |first| Err(first.into()))
}
