mod repository;

pub use repository::*;

/// Schema for the single `transactions` table. Safe to run on every startup.
pub const SCHEMA: &str = include_str!("schema.sql");
