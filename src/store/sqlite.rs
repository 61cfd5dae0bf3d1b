use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{EntityStore, StoreError};
use crate::db::{account, records};
use crate::models::{Account, Credit, Debit, Payment, Transfer};

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn lookup(entity: &'static str, id: &str) -> impl FnOnce(sqlx::Error) -> StoreError {
    let id = id.to_string();
    move |source| StoreError::Lookup { entity, id, source }
}

fn write(entity: &'static str, id: &str) -> impl FnOnce(sqlx::Error) -> StoreError {
    let id = id.to_string();
    move |source| StoreError::Write { entity, id, source }
}

#[async_trait]
impl EntityStore for SqliteStore {
    async fn get_account(&self, id: &str) -> Result<Option<Account>, StoreError> {
        account::get_account(&self.pool, id)
            .await
            .map_err(lookup("account", id))
    }

    async fn save_account(&self, acc: &Account) -> Result<(), StoreError> {
        account::upsert_account(&self.pool, acc)
            .await
            .map_err(write("account", &acc.id))
    }

    async fn save_payment(&self, payment: &Payment) -> Result<(), StoreError> {
        records::insert_payment(&self.pool, payment)
            .await
            .map_err(write("payment", &payment.id))
    }

    async fn save_credit(&self, credit: &Credit) -> Result<(), StoreError> {
        records::insert_credit(&self.pool, credit)
            .await
            .map_err(write("credit", &credit.id))
    }

    async fn save_debit(&self, debit: &Debit) -> Result<(), StoreError> {
        records::insert_debit(&self.pool, debit)
            .await
            .map_err(write("debit", &debit.id))
    }

    async fn save_transfer(&self, transfer: &Transfer) -> Result<(), StoreError> {
        records::insert_transfer(&self.pool, transfer)
            .await
            .map_err(write("transfer", &transfer.id))
    }

    async fn get_payment(&self, id: &str) -> Result<Option<Payment>, StoreError> {
        records::get_payment(&self.pool, id)
            .await
            .map_err(lookup("payment", id))
    }

    async fn get_credit(&self, id: &str) -> Result<Option<Credit>, StoreError> {
        records::get_credit(&self.pool, id)
            .await
            .map_err(lookup("credit", id))
    }

    async fn get_debit(&self, id: &str) -> Result<Option<Debit>, StoreError> {
        records::get_debit(&self.pool, id)
            .await
            .map_err(lookup("debit", id))
    }

    async fn get_transfer(&self, id: &str) -> Result<Option<Transfer>, StoreError> {
        records::get_transfer(&self.pool, id)
            .await
            .map_err(lookup("transfer", id))
    }
}
