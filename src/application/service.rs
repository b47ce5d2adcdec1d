use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{
    parse_cents, total_balance, Cents, EntryKind, NewTransaction, Transaction,
};
use crate::io::Exporter;
use crate::storage::Repository;

use super::AppError;

/// Application service providing high-level operations for the ledger.
/// This is the interface used by the terminal UI and by tests.
pub struct LedgerService {
    repo: Repository,
}

/// Everything the UI needs to draw the ledger: all transactions newest first
/// and the balance computed from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub transactions: Vec<Transaction>,
    pub balance: Cents,
}

impl LedgerService {
    /// Create a new ledger service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Open (creating if needed) the database at the given path and make
    /// sure the transactions table exists.
    pub async fn init(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let repo = Repository::init(&db_url).await?;
        tracing::debug!(database = database_path, "ledger store initialized");
        Ok(Self::new(repo))
    }

    /// Re-run schema creation. A no-op when the table already exists.
    pub async fn initialize(&self) -> Result<(), AppError> {
        Ok(self.repo.initialize().await?)
    }

    /// Release the database connection.
    pub async fn close(&self) {
        self.repo.close().await;
    }

    // ========================
    // Entry operations
    // ========================

    /// Parse the raw amount text, apply the sign for `kind`, and store the
    /// entry with the given category, note and date.
    ///
    /// Returns `AppError::InvalidAmount` without touching the store when the
    /// amount does not parse.
    pub async fn record_entry(
        &self,
        kind: EntryKind,
        amount: &str,
        category: &str,
        note: &str,
        date: NaiveDate,
    ) -> Result<Transaction, AppError> {
        let amount_cents = parse_cents(amount)
            .map_err(|err| AppError::InvalidAmount(format!("{:?}: {}", amount, err)))?;

        let entry = NewTransaction::new(kind.signed(amount_cents), date)
            .with_category(category)
            .with_note(note);

        let transaction = self.append(&entry).await?;
        tracing::info!(
            id = transaction.id,
            kind = %kind,
            amount_cents = transaction.amount_cents,
            "recorded entry"
        );
        Ok(transaction)
    }

    /// Append an already-signed entry.
    pub async fn append(&self, entry: &NewTransaction) -> Result<Transaction, AppError> {
        Ok(self.repo.append(entry).await?)
    }

    // ========================
    // Queries
    // ========================

    /// All transactions, newest first.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        Ok(self.repo.list_all().await?)
    }

    /// All transactions, oldest first.
    pub async fn list_in_store_order(&self) -> Result<Vec<Transaction>, AppError> {
        Ok(self.repo.list_in_store_order().await?)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        Ok(self.repo.count().await?)
    }

    /// Current balance, summed over every stored transaction.
    pub async fn balance(&self) -> Result<Cents, AppError> {
        let transactions = self.repo.list_all().await?;
        checked_balance(&transactions)
    }

    /// Load every transaction and compute the balance from scratch.
    pub async fn snapshot(&self) -> Result<LedgerSnapshot, AppError> {
        let transactions = self.repo.list_all().await?;
        let balance = checked_balance(&transactions)?;
        Ok(LedgerSnapshot {
            transactions,
            balance,
        })
    }

    // ========================
    // Export
    // ========================

    /// Write all transactions to a CSV file, replacing its previous contents.
    /// Returns the number of data rows written.
    pub async fn export_csv(&self, path: &Path) -> Result<usize, AppError> {
        let count = Exporter::new(self).export_to_path(path).await?;
        tracing::info!(path = %path.display(), rows = count, "exported transactions");
        Ok(count)
    }
}

fn checked_balance(transactions: &[Transaction]) -> Result<Cents, AppError> {
    total_balance(transactions).ok_or(AppError::BalanceOverflow {
        count: transactions.len(),
    })
}
