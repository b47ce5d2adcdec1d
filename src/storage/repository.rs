use anyhow::{Context, Result};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::domain::{
    cents_to_major, format_date, major_to_cents, parse_date, NewTransaction, Transaction,
};

use super::SCHEMA;

/// Repository for persisting and querying ledger transactions.
///
/// Owns the process-wide database connection: the pool never holds more than
/// one connection, opened on `connect` and released on `close` or drop.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Create the transactions table if it does not exist yet.
    /// Existing tables and rows are left untouched.
    pub async fn initialize(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .context("Failed to create transactions table")?;
        Ok(())
    }

    /// Initialize a database (connect + create schema).
    pub async fn init(database_url: &str) -> Result<Self> {
        let repo = Self::connect(database_url).await?;
        repo.initialize().await?;
        Ok(repo)
    }

    /// Close the underlying connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Append a new transaction. The id is assigned by SQLite.
    pub async fn append(&self, entry: &NewTransaction) -> Result<Transaction> {
        let result = sqlx::query(
            r#"
            INSERT INTO transactions (amount, category, note, date)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(cents_to_major(entry.amount_cents))
        .bind(&entry.category)
        .bind(&entry.note)
        .bind(format_date(entry.date))
        .execute(&self.pool)
        .await
        .context("Failed to append transaction")?;

        Ok(entry.clone().into_transaction(result.last_insert_rowid()))
    }

    /// List all transactions, newest first.
    pub async fn list_all(&self) -> Result<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, amount, category, note, date
            FROM transactions
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list transactions")?;

        rows.iter().map(Self::row_to_transaction).collect()
    }

    /// List all transactions in insertion order, oldest first.
    pub async fn list_in_store_order(&self) -> Result<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, amount, category, note, date
            FROM transactions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list transactions in store order")?;

        rows.iter().map(Self::row_to_transaction).collect()
    }

    /// Count stored transactions.
    pub async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM transactions")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count transactions")?;

        Ok(row.get("count"))
    }

    fn row_to_transaction(row: &SqliteRow) -> Result<Transaction> {
        let amount: Option<f64> = row.try_get("amount").context("Invalid amount")?;
        let category: Option<String> = row.try_get("category").context("Invalid category")?;
        let note: Option<String> = row.try_get("note").context("Invalid note")?;
        let date_str: String = row.try_get("date").context("Missing transaction date")?;

        Ok(Transaction {
            id: row.try_get("id").context("Invalid transaction ID")?,
            amount_cents: major_to_cents(amount.unwrap_or_default()),
            category: category.unwrap_or_default(),
            note: note.unwrap_or_default(),
            date: parse_date(&date_str)
                .with_context(|| format!("Invalid transaction date: {}", date_str))?,
        })
    }
}
