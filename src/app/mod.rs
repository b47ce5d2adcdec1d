mod form;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::{
    application::{AppError, LedgerService, LedgerSnapshot, Result},
    domain::{Cents, EntryKind, Transaction, today},
    ui::{self, keymap::AppAction},
};

pub use form::{EntryForm, Focus};

const PAGE_SIZE: usize = 10;

/// Where exports go and how money is labelled.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub export_path: PathBuf,
    pub currency: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from("transactions.csv"),
            currency: "₹".to_string(),
        }
    }
}

/// What the screen currently shows of the ledger.
#[derive(Debug, Default)]
pub struct LedgerView {
    /// Newest first
    pub transactions: Vec<Transaction>,
    pub balance: Cents,
    pub scroll: usize,
}

impl LedgerView {
    /// Replace the shown rows and balance with a fresh snapshot.
    pub fn apply(&mut self, snapshot: LedgerSnapshot) {
        self.transactions = snapshot.transactions;
        self.balance = snapshot.balance;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        self.transactions.len().saturating_sub(1)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }
}

#[derive(Debug)]
pub struct AppState {
    pub form: EntryForm,
    pub view: LedgerView,
    pub currency: String,
}

impl AppState {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            form: EntryForm::default(),
            view: LedgerView::default(),
            currency: currency.into(),
        }
    }
}

/// Result of pressing Income or Expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Recorded(Transaction),
    /// The amount did not parse; nothing was stored and the form is unchanged.
    Rejected,
}

pub struct App {
    service: LedgerService,
    settings: AppSettings,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(service: LedgerService, settings: AppSettings) -> Self {
        let state = AppState::new(settings.currency.clone());
        Self {
            service,
            settings,
            state,
            should_quit: false,
        }
    }

    pub fn service(&self) -> &LedgerService {
        &self.service
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn run(&mut self) -> Result<()> {
        self.refresh().await?;
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    /// Release the store connection.
    pub async fn shutdown(&self) {
        self.service.close().await;
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key).await?;
                    }
                }
            }
        }

        Ok(())
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match ui::keymap::map_key(key) {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::NextField => self.state.form.focus_next(),
            AppAction::PrevField => self.state.form.focus_prev(),
            AppAction::Activate => match self.state.form.focus {
                Focus::Income => {
                    self.submit(EntryKind::Income).await?;
                }
                Focus::Expense => {
                    self.submit(EntryKind::Expense).await?;
                }
                Focus::Export => {
                    self.export().await?;
                }
                Focus::Amount | Focus::Category | Focus::Note => self.state.form.focus_next(),
            },
            AppAction::Income => {
                self.submit(EntryKind::Income).await?;
            }
            AppAction::Expense => {
                self.submit(EntryKind::Expense).await?;
            }
            AppAction::Export => {
                self.export().await?;
            }
            AppAction::Backspace => self.state.form.backspace(),
            AppAction::ScrollUp => self.state.view.scroll_up(1),
            AppAction::ScrollDown => self.state.view.scroll_down(1),
            AppAction::PageUp => self.state.view.scroll_up(PAGE_SIZE),
            AppAction::PageDown => self.state.view.scroll_down(PAGE_SIZE),
            AppAction::Input(ch) => self.state.form.push(ch),
            AppAction::None => {}
        }

        Ok(())
    }

    /// Record the pending entry as income or expense.
    ///
    /// An unparseable amount is dropped without any message and the pending
    /// fields are left as typed. On success the fields are cleared and the
    /// view is reloaded.
    pub async fn submit(&mut self, kind: EntryKind) -> Result<SubmitOutcome> {
        let form = &self.state.form;
        let recorded = self
            .service
            .record_entry(kind, &form.amount, &form.category, &form.note, today())
            .await;

        match recorded {
            Ok(transaction) => {
                self.state.form.clear();
                self.refresh().await?;
                Ok(SubmitOutcome::Recorded(transaction))
            }
            Err(AppError::InvalidAmount(reason)) => {
                tracing::debug!(%kind, %reason, "ignoring entry with invalid amount");
                Ok(SubmitOutcome::Rejected)
            }
            Err(err) => Err(err),
        }
    }

    /// Reload every transaction and recompute the balance.
    pub async fn refresh(&mut self) -> Result<()> {
        let snapshot = self.service.snapshot().await?;
        tracing::debug!(
            rows = snapshot.transactions.len(),
            balance_cents = snapshot.balance,
            "refreshed ledger view"
        );
        self.state.view.apply(snapshot);
        Ok(())
    }

    /// Write the whole ledger to the configured export path.
    pub async fn export(&mut self) -> Result<usize> {
        self.service.export_csv(&self.settings.export_path).await
    }
}
