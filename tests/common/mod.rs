// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use tally::app::{App, AppSettings};
use tally::application::LedgerService;
use tally::domain::NewTransaction;
use tempfile::TempDir;

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let service = LedgerService::init(db_path.to_str().unwrap()).await?;
    Ok((service, temp_dir))
}

/// Helper to create an app (no terminal attached) exporting into the temp dir
pub async fn test_app() -> Result<(App, TempDir)> {
    let (service, temp_dir) = test_service().await?;
    let settings = AppSettings {
        export_path: export_path(&temp_dir),
        currency: "₹".to_string(),
    };
    Ok((App::new(service, settings), temp_dir))
}

pub fn export_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("transactions.csv")
}

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Append a signed entry with a category
pub async fn append(
    service: &LedgerService,
    amount_cents: i64,
    category: &str,
    date: &str,
) -> Result<i64> {
    let entry = NewTransaction::new(amount_cents, parse_date(date)).with_category(category);
    Ok(service.append(&entry).await?.id)
}
