use async_trait::async_trait;

use super::{EntityStore, StoreError};
use crate::cache::AccountCacheManager;
use crate::models::{Account, Credit, Debit, Payment, Transfer};

/// Read-through account cache in front of another store.
///
/// The cache only ever holds rows read back from the inner store. Records pass straight through.
pub struct CachedStore<S> {
    inner: S,
    accounts: AccountCacheManager,
}

impl<S: EntityStore> CachedStore<S> {
    pub fn new(inner: S, accounts: AccountCacheManager) -> Self {
        Self { inner, accounts }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: EntityStore> EntityStore for CachedStore<S> {
    async fn get_account(&self, id: &str) -> Result<Option<Account>, StoreError> {
        if let Some(account) = self.accounts.get(id).await {
            return Ok(Some(account));
        }

        let account = self.inner.get_account(id).await?;
        if let Some(account) = &account {
            self.accounts.put(account).await;
        }
        Ok(account)
    }

    async fn save_account(&self, account: &Account) -> Result<(), StoreError> {
        if let Err(e) = self.inner.save_account(account).await {
            self.accounts.invalidate(&account.id).await;
            return Err(e);
        }

        // The inner upsert merges watermarks, so cache the merged row
        match self.inner.get_account(&account.id).await {
            Ok(Some(stored)) => self.accounts.put(&stored).await,
            _ => self.accounts.invalidate(&account.id).await,
        }
        Ok(())
    }

    async fn save_payment(&self, payment: &Payment) -> Result<(), StoreError> {
        self.inner.save_payment(payment).await
    }

    async fn save_credit(&self, credit: &Credit) -> Result<(), StoreError> {
        self.inner.save_credit(credit).await
    }

    async fn save_debit(&self, debit: &Debit) -> Result<(), StoreError> {
        self.inner.save_debit(debit).await
    }

    async fn save_transfer(&self, transfer: &Transfer) -> Result<(), StoreError> {
        self.inner.save_transfer(transfer).await
    }

    async fn get_payment(&self, id: &str) -> Result<Option<Payment>, StoreError> {
        self.inner.get_payment(id).await
    }

    async fn get_credit(&self, id: &str) -> Result<Option<Credit>, StoreError> {
        self.inner.get_credit(id).await
    }

    async fn get_debit(&self, id: &str) -> Result<Option<Debit>, StoreError> {
        self.inner.get_debit(id).await
    }

    async fn get_transfer(&self, id: &str) -> Result<Option<Transfer>, StoreError> {
        self.inner.get_transfer(id).await
    }
}
