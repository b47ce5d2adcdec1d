use chrono::{Local, NaiveDate};

use super::Cents;

pub type TransactionId = i64;

/// Storage and display format for transaction dates, e.g. "05 Mar 2024".
pub const DATE_FORMAT: &str = "%d %b %Y";

/// Whether an entry adds money to the ledger or takes it away.
///
/// The kind is not persisted: the sign of the stored amount is the only
/// discriminator between income and expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    /// Apply this kind's sign to a parsed amount. Expenses negate the value as
    /// entered, so an expense of "-5" records +5.
    pub fn signed(&self, amount_cents: Cents) -> Cents {
        match self {
            EntryKind::Income => amount_cents,
            EntryKind::Expense => -amount_cents,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ledger entry. Transactions are immutable once stored; the ledger
/// has no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Assigned by the store, strictly increasing in insertion order
    pub id: TransactionId,
    /// Signed amount: positive is income, negative is expense
    pub amount_cents: Cents,
    pub category: String,
    pub note: String,
    /// Local calendar date at the moment the entry was recorded
    pub date: NaiveDate,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.amount_cents > 0
    }

    /// "+" for income, "-" for everything else (zero included).
    pub fn sign_symbol(&self) -> &'static str {
        if self.is_income() { "+" } else { "-" }
    }

    pub fn formatted_date(&self) -> String {
        format_date(self.date)
    }
}

/// An entry that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub amount_cents: Cents,
    pub category: String,
    pub note: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn new(amount_cents: Cents, date: NaiveDate) -> Self {
        Self {
            amount_cents,
            category: String::new(),
            note: String::new(),
            date,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Attach the id handed out by the store.
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount_cents: self.amount_cents,
            category: self.category,
            note: self.note,
            date: self.date,
        }
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}
