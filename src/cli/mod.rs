use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::app::{App, AppSettings};
use crate::application::LedgerService;
use crate::logging;

/// Tally - Personal Finance Ledger
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Record income and expenses, watch the balance, export to CSV")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "finance.db")]
    pub database: String,

    /// CSV file written by the Export action (overwritten on every export)
    #[arg(short, long, default_value = "transactions.csv")]
    pub export: PathBuf,

    /// Currency symbol shown in front of amounts
    #[arg(short, long, default_value = "₹")]
    pub currency: String,

    /// Log file path (the terminal is owned by the UI)
    #[arg(long, default_value = "tally.log")]
    pub log_file: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn settings(&self) -> AppSettings {
        AppSettings {
            export_path: self.export.clone(),
            currency: self.currency.clone(),
        }
    }

    pub async fn run(self) -> Result<()> {
        logging::init(&self.log_file, self.verbose)?;
        tracing::info!(database = %self.database, export = %self.export.display(), "starting tally");

        let service = LedgerService::init(&self.database)
            .await
            .with_context(|| format!("Failed to open database: {}", self.database))?;

        let mut app = App::new(service, self.settings());
        let result = app.run().await;
        app.shutdown().await;

        if let Err(err) = &result {
            tracing::error!("ledger stopped: {}", err);
        }
        result.context("Ledger stopped unexpectedly")
    }
}
