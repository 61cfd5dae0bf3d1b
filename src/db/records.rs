// Insert-once writers for the per-event records. Replaying an event hits the
// primary key and leaves the stored row as it was.

use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use sqlx::{sqlite::SqliteRow, Pool, Row, Sqlite};

use crate::models::{Credit, Debit, Payment, Transfer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordTable {
    Payments,
    Credits,
    Debits,
    Transfers,
}

impl RecordTable {
    fn name(self) -> &'static str {
        match self {
            Self::Payments => "payments",
            Self::Credits => "credits",
            Self::Debits => "debits",
            Self::Transfers => "transfers",
        }
    }
}

pub async fn insert_payment(pool: &Pool<Sqlite>, payment: &Payment) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO payments (id, from_id, to_id, tx_hash, amount) VALUES (?, ?, ?, ?, ?)
         ON CONFLICT(id) DO NOTHING",
    )
    .bind(&payment.id)
    .bind(&payment.from_id)
    .bind(&payment.to_id)
    .bind(&payment.tx_hash)
    .bind(&payment.amount)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn insert_credit(pool: &Pool<Sqlite>, credit: &Credit) -> Result<(), sqlx::Error> {
    insert_effect(pool, RecordTable::Credits, &credit.id, &credit.account_id, &credit.amount).await
}

pub async fn insert_debit(pool: &Pool<Sqlite>, debit: &Debit) -> Result<(), sqlx::Error> {
    insert_effect(pool, RecordTable::Debits, &debit.id, &debit.account_id, &debit.amount).await
}

async fn insert_effect(
    pool: &Pool<Sqlite>,
    table: RecordTable,
    id: &str,
    account_id: &str,
    amount: &str,
) -> Result<(), sqlx::Error> {
    let sql = format!(
        "INSERT INTO {} (id, account_id, amount) VALUES (?, ?, ?) ON CONFLICT(id) DO NOTHING",
        table.name()
    );
    sqlx::query(&sql)
        .bind(id)
        .bind(account_id)
        .bind(amount)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn insert_transfer(pool: &Pool<Sqlite>, transfer: &Transfer) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO transfers (id, ledger, date, contract, from_id, to_id, value)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(id) DO NOTHING",
    )
    .bind(&transfer.id)
    .bind(transfer.ledger)
    .bind(transfer.date)
    .bind(&transfer.contract)
    .bind(&transfer.from_id)
    .bind(&transfer.to_id)
    .bind(transfer.value.to_string())
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_payment(pool: &Pool<Sqlite>, id: &str) -> Result<Option<Payment>, sqlx::Error> {
    let row = sqlx::query("SELECT id, from_id, to_id, tx_hash, amount FROM payments WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(|row| {
        Ok::<_, sqlx::Error>(Payment {
            id: row.try_get("id")?,
            from_id: row.try_get("from_id")?,
            to_id: row.try_get("to_id")?,
            tx_hash: row.try_get("tx_hash")?,
            amount: row.try_get("amount")?,
        })
    })
    .transpose()
}

pub async fn get_credit(pool: &Pool<Sqlite>, id: &str) -> Result<Option<Credit>, sqlx::Error> {
    let row = fetch_effect(pool, RecordTable::Credits, id).await?;
    row.map(|row| {
        Ok::<_, sqlx::Error>(Credit {
            id: row.try_get("id")?,
            account_id: row.try_get("account_id")?,
            amount: row.try_get("amount")?,
        })
    })
    .transpose()
}

pub async fn get_debit(pool: &Pool<Sqlite>, id: &str) -> Result<Option<Debit>, sqlx::Error> {
    let row = fetch_effect(pool, RecordTable::Debits, id).await?;
    row.map(|row| {
        Ok::<_, sqlx::Error>(Debit {
            id: row.try_get("id")?,
            account_id: row.try_get("account_id")?,
            amount: row.try_get("amount")?,
        })
    })
    .transpose()
}

async fn fetch_effect(
    pool: &Pool<Sqlite>,
    table: RecordTable,
    id: &str,
) -> Result<Option<SqliteRow>, sqlx::Error> {
    let sql = format!("SELECT id, account_id, amount FROM {} WHERE id = ?", table.name());
    sqlx::query(&sql).bind(id).fetch_optional(pool).await
}

pub async fn get_transfer(pool: &Pool<Sqlite>, id: &str) -> Result<Option<Transfer>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, ledger, date, contract, from_id, to_id, value FROM transfers WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| {
        let value: String = row.try_get("value")?;
        let value: BigInt = value
            .parse()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let date: DateTime<Utc> = row.try_get("date")?;

        Ok::<_, sqlx::Error>(Transfer {
            id: row.try_get("id")?,
            ledger: row.try_get("ledger")?,
            date,
            contract: row.try_get("contract")?,
            from_id: row.try_get("from_id")?,
            to_id: row.try_get("to_id")?,
            value,
        })
    })
    .transpose()
}

pub async fn count_records(pool: &Pool<Sqlite>, table: RecordTable) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}", table.name());
    let count = sqlx::query(&sql)
        .fetch_one(pool)
        .await?
        .try_get::<i64, _>(0)?;

    Ok(count)
}
