use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Balance of {count} transactions does not fit in the ledger's money type")]
    BalanceOverflow { count: usize },

    #[error("Cannot open export destination {path}: {source}")]
    Export {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
