/// A control on the entry card that can hold keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Amount,
    Category,
    Note,
    Income,
    Expense,
    Export,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Amount,
        Focus::Category,
        Focus::Note,
        Focus::Income,
        Focus::Expense,
        Focus::Export,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn is_text_field(self) -> bool {
        matches!(self, Focus::Amount | Focus::Category | Focus::Note)
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Amount => "Amount",
            Focus::Category => "Category",
            Focus::Note => "Note (optional)",
            Focus::Income => "Income",
            Focus::Expense => "Expense",
            Focus::Export => "Export CSV",
        }
    }
}

/// Pending input for the next entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub amount: String,
    pub category: String,
    pub note: String,
    pub focus: Focus,
}

impl EntryForm {
    pub fn value(&self, field: Focus) -> Option<&str> {
        match field {
            Focus::Amount => Some(&self.amount),
            Focus::Category => Some(&self.category),
            Focus::Note => Some(&self.note),
            _ => None,
        }
    }

    fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Amount => Some(&mut self.amount),
            Focus::Category => Some(&mut self.category),
            Focus::Note => Some(&mut self.note),
            _ => None,
        }
    }

    /// Type a character into the focused field. Ignored on buttons.
    pub fn push(&mut self, ch: char) {
        if let Some(field) = self.active_field_mut() {
            field.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.pop();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Empty all three fields and put the cursor back on the amount.
    pub fn clear(&mut self) {
        self.amount.clear();
        self.category.clear();
        self.note.clear();
        self.focus = Focus::Amount;
    }
}
