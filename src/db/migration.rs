use sqlx::SqlitePool;
use tracing::info;

// References are plain indexed columns: the writes of one event land
// concurrently, so an account row and the record pointing at it may commit in
// either order.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS accounts (
            id TEXT PRIMARY KEY,
            first_seen_ledger INTEGER NOT NULL,
            last_seen_ledger INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS payments (
            id TEXT PRIMARY KEY,
            from_id TEXT NOT NULL,
            to_id TEXT NOT NULL,
            tx_hash TEXT NOT NULL,
            amount TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS credits (
            id TEXT PRIMARY KEY,
            account_id TEXT NOT NULL,
            amount TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS debits (
            id TEXT PRIMARY KEY,
            account_id TEXT NOT NULL,
            amount TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    // value is the decimal string of an arbitrary precision integer
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS transfers (
            id TEXT PRIMARY KEY,
            ledger INTEGER NOT NULL,
            date TEXT NOT NULL,
            contract TEXT NOT NULL,
            from_id TEXT NOT NULL,
            to_id TEXT NOT NULL,
            value TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    for index in [
        "CREATE INDEX IF NOT EXISTS idx_payments_from_id ON payments(from_id)",
        "CREATE INDEX IF NOT EXISTS idx_payments_to_id ON payments(to_id)",
        "CREATE INDEX IF NOT EXISTS idx_credits_account_id ON credits(account_id)",
        "CREATE INDEX IF NOT EXISTS idx_debits_account_id ON debits(account_id)",
        "CREATE INDEX IF NOT EXISTS idx_transfers_from_id ON transfers(from_id)",
        "CREATE INDEX IF NOT EXISTS idx_transfers_to_id ON transfers(to_id)",
        "CREATE INDEX IF NOT EXISTS idx_transfers_ledger ON transfers(ledger)",
    ] {
        sqlx::query(index).execute(pool).await?;
    }

    info!("Database migrations completed successfully");
    Ok(())
}
