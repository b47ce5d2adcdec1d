mod common;

use std::fs;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tally::app::{App, EntryForm, Focus, SubmitOutcome};
use tally::domain::{today, EntryKind, MAX_AMOUNT_CENTS};
use tally::ui::feed::balance_label;

use common::{export_path, test_app};

fn fill(app: &mut App, amount: &str, category: &str, note: &str) {
    app.state.form = EntryForm {
        amount: amount.to_string(),
        category: category.to_string(),
        note: note.to_string(),
        focus: Focus::Amount,
    };
}

async fn type_text(app: &mut App, text: &str) -> Result<()> {
    for ch in text.chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
            .await?;
    }
    Ok(())
}

async fn press(app: &mut App, code: KeyCode) -> Result<()> {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).await?;
    Ok(())
}

#[tokio::test]
async fn test_submit_expense_negates_amount() -> Result<()> {
    let (mut app, _temp) = test_app().await?;
    fill(&mut app, "50", "Food", "");

    let outcome = app.submit(EntryKind::Expense).await?;

    let SubmitOutcome::Recorded(transaction) = outcome else {
        panic!("expected a recorded entry");
    };
    assert_eq!(transaction.amount_cents, -5000);
    assert_eq!(transaction.date, today());
    assert_eq!(app.service().balance().await?, -5000);

    Ok(())
}

#[tokio::test]
async fn test_submit_income_keeps_amount() -> Result<()> {
    let (mut app, _temp) = test_app().await?;
    fill(&mut app, "50", "Gift", "birthday");

    app.submit(EntryKind::Income).await?;

    let stored = app.service().list_transactions().await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].amount_cents, 5000);
    assert_eq!(stored[0].note, "birthday");

    Ok(())
}

#[tokio::test]
async fn test_submit_clears_form_and_refreshes_view() -> Result<()> {
    let (mut app, _temp) = test_app().await?;
    fill(&mut app, "12.50", "Books", "paperback");
    app.state.form.focus = Focus::Income;

    app.submit(EntryKind::Income).await?;

    assert_eq!(app.state.form, EntryForm::default());
    assert_eq!(app.state.view.transactions.len(), 1);
    assert_eq!(app.state.view.balance, 1250);

    Ok(())
}

#[tokio::test]
async fn test_submit_invalid_amount_changes_nothing() -> Result<()> {
    let (mut app, _temp) = test_app().await?;
    fill(&mut app, "abc", "Food", "lunch");
    let before = app.state.form.clone();

    let outcome = app.submit(EntryKind::Expense).await?;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(app.state.form, before);
    assert_eq!(app.service().count().await?, 0);
    assert!(app.state.view.transactions.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_submit_empty_amount_is_rejected() -> Result<()> {
    let (mut app, _temp) = test_app().await?;
    fill(&mut app, "", "Food", "");

    assert_eq!(app.submit(EntryKind::Income).await?, SubmitOutcome::Rejected);
    assert_eq!(app.service().count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_submit_sub_cent_amount_is_rejected() -> Result<()> {
    let (mut app, _temp) = test_app().await?;
    fill(&mut app, "0.005", "Interest", "");
    let before = app.state.form.clone();

    assert_eq!(app.submit(EntryKind::Income).await?, SubmitOutcome::Rejected);
    assert_eq!(app.state.form, before);
    assert_eq!(app.service().count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_submit_huge_amounts_twice_is_rejected() -> Result<()> {
    let (mut app, _temp) = test_app().await?;

    for _ in 0..2 {
        fill(&mut app, "50000000000000000", "Lottery", "");
        assert_eq!(app.submit(EntryKind::Income).await?, SubmitOutcome::Rejected);
    }

    assert_eq!(app.service().count().await?, 0);
    app.refresh().await?;
    assert_eq!(app.state.view.balance, 0);

    Ok(())
}

#[tokio::test]
async fn test_submit_largest_amount_keeps_balance_exact() -> Result<()> {
    let (mut app, _temp) = test_app().await?;

    for _ in 0..2 {
        fill(&mut app, "1000000000000", "Windfall", "");
        app.submit(EntryKind::Income).await?;
    }

    assert_eq!(app.state.view.balance, 2 * MAX_AMOUNT_CENTS);
    assert_eq!(app.service().balance().await?, 2 * MAX_AMOUNT_CENTS);

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_salary_and_food() -> Result<()> {
    let (mut app, _temp) = test_app().await?;

    fill(&mut app, "1000", "Salary", "");
    app.submit(EntryKind::Income).await?;
    fill(&mut app, "200", "Food", "");
    app.submit(EntryKind::Expense).await?;

    let rows = &app.state.view.transactions;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].category, "Food");
    assert_eq!(rows[0].amount_cents, -20000);
    assert_eq!(rows[1].category, "Salary");
    assert_eq!(rows[1].amount_cents, 100000);
    assert_eq!(
        balance_label(app.state.view.balance, &app.state.currency),
        "Balance  ₹800.00"
    );

    Ok(())
}

#[tokio::test]
async fn test_keyboard_flow_records_entry() -> Result<()> {
    let (mut app, _temp) = test_app().await?;
    app.refresh().await?;

    type_text(&mut app, "75.25").await?;
    press(&mut app, KeyCode::Enter).await?;
    type_text(&mut app, "Transport").await?;
    press(&mut app, KeyCode::Tab).await?;
    type_text(&mut app, "taxi").await?;
    press(&mut app, KeyCode::F(3)).await?;

    let stored = app.service().list_transactions().await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].amount_cents, -7525);
    assert_eq!(stored[0].category, "Transport");
    assert_eq!(stored[0].note, "taxi");
    assert_eq!(app.state.form.focus, Focus::Amount);
    assert!(!app.should_quit());

    Ok(())
}

#[tokio::test]
async fn test_enter_on_income_button_submits() -> Result<()> {
    let (mut app, _temp) = test_app().await?;

    type_text(&mut app, "10").await?;
    app.state.form.focus = Focus::Income;
    press(&mut app, KeyCode::Enter).await?;

    assert_eq!(app.service().balance().await?, 1000);

    Ok(())
}

#[tokio::test]
async fn test_export_key_writes_file() -> Result<()> {
    let (mut app, temp) = test_app().await?;
    fill(&mut app, "3", "Snacks", "");
    app.submit(EntryKind::Expense).await?;

    press(&mut app, KeyCode::F(4)).await?;

    let contents = fs::read_to_string(export_path(&temp))?;
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Amount,Category,Note,Date");
    assert!(lines[1].starts_with("-3.00,Snacks,,"));

    Ok(())
}

#[tokio::test]
async fn test_export_leaves_form_untouched() -> Result<()> {
    let (mut app, _temp) = test_app().await?;
    fill(&mut app, "99", "pending", "");
    let before = app.state.form.clone();

    let count = app.export().await?;

    assert_eq!(count, 0);
    assert_eq!(app.state.form, before);

    Ok(())
}

#[tokio::test]
async fn test_escape_quits() -> Result<()> {
    let (mut app, _temp) = test_app().await?;

    press(&mut app, KeyCode::Esc).await?;

    assert!(app.should_quit());

    Ok(())
}
