//! In-process store, mainly for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EntityStore, StoreError};
use crate::models::{Account, Credit, Debit, Payment, Transfer};

#[derive(Default)]
pub struct MemoryStore {
    accounts: RwLock<HashMap<String, Account>>,
    payments: RwLock<HashMap<String, Payment>>,
    credits: RwLock<HashMap<String, Credit>>,
    debits: RwLock<HashMap<String, Debit>>,
    transfers: RwLock<HashMap<String, Transfer>>,
    writes: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful write calls so far, replays included.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn transfer_count(&self) -> usize {
        self.transfers.read().await.len()
    }

    fn check_read(&self) -> Result<(), StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("reads disabled".to_string()));
        }
        Ok(())
    }

    fn check_write(&self, entity: &str, id: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("rejected {entity} {id}")));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

async fn insert_once<T: Clone>(map: &RwLock<HashMap<String, T>>, id: &str, record: &T) {
    map.write()
        .await
        .entry(id.to_string())
        .or_insert_with(|| record.clone());
}

async fn get_cloned<T: Clone>(map: &RwLock<HashMap<String, T>>, id: &str) -> Option<T> {
    map.read().await.get(id).cloned()
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn get_account(&self, id: &str) -> Result<Option<Account>, StoreError> {
        self.check_read()?;
        Ok(get_cloned(&self.accounts, id).await)
    }

    async fn save_account(&self, account: &Account) -> Result<(), StoreError> {
        self.check_write("account", &account.id)?;
        let mut accounts = self.accounts.write().await;
        accounts
            .entry(account.id.clone())
            .and_modify(|stored| {
                stored.last_seen_ledger = stored.last_seen_ledger.max(account.last_seen_ledger)
            })
            .or_insert_with(|| account.clone());
        Ok(())
    }

    async fn save_payment(&self, payment: &Payment) -> Result<(), StoreError> {
        self.check_write("payment", &payment.id)?;
        insert_once(&self.payments, &payment.id, payment).await;
        Ok(())
    }

    async fn save_credit(&self, credit: &Credit) -> Result<(), StoreError> {
        self.check_write("credit", &credit.id)?;
        insert_once(&self.credits, &credit.id, credit).await;
        Ok(())
    }

    async fn save_debit(&self, debit: &Debit) -> Result<(), StoreError> {
        self.check_write("debit", &debit.id)?;
        insert_once(&self.debits, &debit.id, debit).await;
        Ok(())
    }

    async fn save_transfer(&self, transfer: &Transfer) -> Result<(), StoreError> {
        self.check_write("transfer", &transfer.id)?;
        insert_once(&self.transfers, &transfer.id, transfer).await;
        Ok(())
    }

    async fn get_payment(&self, id: &str) -> Result<Option<Payment>, StoreError> {
        self.check_read()?;
        Ok(get_cloned(&self.payments, id).await)
    }

    async fn get_credit(&self, id: &str) -> Result<Option<Credit>, StoreError> {
        self.check_read()?;
        Ok(get_cloned(&self.credits, id).await)
    }

    async fn get_debit(&self, id: &str) -> Result<Option<Debit>, StoreError> {
        self.check_read()?;
        Ok(get_cloned(&self.debits, id).await)
    }

    async fn get_transfer(&self, id: &str) -> Result<Option<Transfer>, StoreError> {
        self.check_read()?;
        Ok(get_cloned(&self.transfers, id).await)
    }
}
