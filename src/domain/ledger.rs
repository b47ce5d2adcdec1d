use super::{Cents, Transaction};

/// Compute the ledger balance from a list of transactions.
/// Balance = sum of all signed amounts. Always recomputed from the full list.
/// Returns `None` if the sum does not fit in `Cents`.
pub fn total_balance(transactions: &[Transaction]) -> Option<Cents> {
    transactions
        .iter()
        .try_fold(0 as Cents, |acc, tx| acc.checked_add(tx.amount_cents))
}

/// Check that transactions are ordered newest first (strictly descending id).
pub fn is_newest_first(transactions: &[Transaction]) -> bool {
    transactions.windows(2).all(|pair| pair[0].id > pair[1].id)
}
