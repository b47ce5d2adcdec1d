use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::AppState,
    domain::{Cents, Transaction, format_money},
    ui::theme::Theme,
};

/// Header text, e.g. "Balance  ₹800.00".
pub fn balance_label(balance: Cents, currency: &str) -> String {
    format!("Balance  {}", format_money(balance, currency))
}

/// One feed row: date, sign, absolute amount, category, note.
pub fn feed_line(transaction: &Transaction, currency: &str) -> String {
    format!(
        "{}   {}{}   {}  {}",
        transaction.formatted_date(),
        transaction.sign_symbol(),
        format_money(transaction.amount_cents.saturating_abs(), currency),
        transaction.category,
        transaction.note
    )
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let lines = if state.view.transactions.is_empty() {
        vec![Line::styled(
            "No transactions yet.",
            Style::default().fg(theme.dim),
        )]
    } else {
        state
            .view
            .transactions
            .iter()
            .map(|tx| {
                let color = if tx.is_income() {
                    theme.positive
                } else {
                    theme.negative
                };
                Line::styled(feed_line(tx, &state.currency), Style::default().fg(color))
            })
            .collect()
    };

    let scroll = u16::try_from(state.view.scroll).unwrap_or(u16::MAX);
    let block = Block::default().borders(Borders::ALL).title("Transactions");
    let feed = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(feed, area);
}
