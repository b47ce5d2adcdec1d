use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::application::{AppError, LedgerService};
use crate::domain::{format_cents, Transaction};

/// Header row of the transactions CSV.
pub const CSV_HEADER: [&str; 4] = ["Amount", "Category", "Note", "Date"];

/// One CSV data row. Field order matches `CSV_HEADER`.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    amount: String,
    category: &'a str,
    note: &'a str,
    date: String,
}

impl<'a> From<&'a Transaction> for ExportRow<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        Self {
            amount: format_cents(transaction.amount_cents),
            category: &transaction.category,
            note: &transaction.note,
            date: transaction.formatted_date(),
        }
    }
}

/// Exporter for writing ledger data out as CSV
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export every transaction, oldest first, to CSV. The header row is
    /// always written, even for an empty ledger.
    pub async fn export_transactions_csv<W: Write>(&self, writer: W) -> Result<usize, AppError> {
        let transactions = self.service.list_in_store_order().await?;
        write_csv(&transactions, writer)
    }

    /// Export to a file, truncating whatever was there before. The rows are
    /// loaded first so a failed read leaves the previous file in place.
    pub async fn export_to_path(&self, path: &Path) -> Result<usize, AppError> {
        let transactions = self.service.list_in_store_order().await?;
        let file = File::create(path).map_err(|source| AppError::Export {
            path: path.display().to_string(),
            source,
        })?;
        write_csv(&transactions, file)
    }
}

fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<usize, AppError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    let mut count = 0;
    for transaction in transactions {
        csv_writer.serialize(ExportRow::from(transaction))?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}
