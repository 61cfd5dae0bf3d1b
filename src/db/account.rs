use sqlx::{sqlite::SqliteRow, Pool, Row, Sqlite};

use crate::models::Account;

pub async fn get_account(pool: &Pool<Sqlite>, id: &str) -> Result<Option<Account>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, first_seen_ledger, last_seen_ledger FROM accounts WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(account_from_row).transpose()
}

/// Inserts the account, or raises the stored `last_seen_ledger` when the row
/// already exists. `first_seen_ledger` is never overwritten.
pub async fn upsert_account(pool: &Pool<Sqlite>, account: &Account) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO accounts (id, first_seen_ledger, last_seen_ledger) VALUES (?, ?, ?)
         ON CONFLICT(id) DO UPDATE SET
            last_seen_ledger = MAX(accounts.last_seen_ledger, excluded.last_seen_ledger)",
    )
    .bind(&account.id)
    .bind(account.first_seen_ledger)
    .bind(account.last_seen_ledger)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn count_accounts(pool: &Pool<Sqlite>) -> Result<i64, sqlx::Error> {
    let count = sqlx::query("SELECT COUNT(*) FROM accounts")
        .fetch_one(pool)
        .await?
        .try_get::<i64, _>(0)?;

    Ok(count)
}

fn account_from_row(row: &SqliteRow) -> Result<Account, sqlx::Error> {
    Ok(Account {
        id: row.try_get("id")?,
        first_seen_ledger: row.try_get("first_seen_ledger")?,
        last_seen_ledger: row.try_get("last_seen_ledger")?,
    })
}
