//! Persistence port used by the event handlers.

pub mod cached;
pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Account, Credit, Debit, Payment, Transfer};

pub use cached::CachedStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to look up {entity} {id}: {source}")]
    Lookup {
        entity: &'static str,
        id: String,
        source: sqlx::Error,
    },

    #[error("Failed to write {entity} {id}: {source}")]
    Write {
        entity: &'static str,
        id: String,
        source: sqlx::Error,
    },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Keyed entity storage.
///
/// Accounts are upserted: the first write fixes `first_seen_ledger`, later
/// writes only ever raise `last_seen_ledger`. Every other record is written
/// once; saving an id that already exists leaves the stored row untouched.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn get_account(&self, id: &str) -> Result<Option<Account>, StoreError>;
    async fn save_account(&self, account: &Account) -> Result<(), StoreError>;

    async fn save_payment(&self, payment: &Payment) -> Result<(), StoreError>;
    async fn save_credit(&self, credit: &Credit) -> Result<(), StoreError>;
    async fn save_debit(&self, debit: &Debit) -> Result<(), StoreError>;
    async fn save_transfer(&self, transfer: &Transfer) -> Result<(), StoreError>;

    async fn get_payment(&self, id: &str) -> Result<Option<Payment>, StoreError>;
    async fn get_credit(&self, id: &str) -> Result<Option<Credit>, StoreError>;
    async fn get_debit(&self, id: &str) -> Result<Option<Debit>, StoreError>;
    async fn get_transfer(&self, id: &str) -> Result<Option<Transfer>, StoreError>;
}
