//! Transactions page state and the dialog flows it owns
//!
//! The page owns every dialog's open flag. Dialogs only ever ask for a flag to
//! change through the [`DialogHandler`] impls below.

use chrono::{Duration, NaiveDate};
use dialog_shell::{ActionSlot, DialogHandler, DialogState, DismissReason};
use ratatui::crossterm::event::{Event, KeyCode, KeyEventKind};
use tracing::info;

/// Ticks a simulated save stays in the loading state.
pub const SAVE_TICKS: u16 = 20;

/// Form field indices, matching the dialog's body focusables.
pub const DESCRIPTION_FIELD: usize = 0;
pub const AMOUNT_FIELD: usize = 1;
pub const FIELD_LABELS: [&str; 2] = ["Description", "Amount"];

/// One row of the transactions table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount_cents: i64,
}

impl Transaction {
    /// Amount formatted with a sign and two decimals, e.g. `-12.50`.
    #[must_use]
    pub fn amount_label(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "+" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// Mock ledger relative to `today`, newest first.
#[must_use]
pub fn mock_transactions(today: NaiveDate) -> Vec<Transaction> {
    [
        (0, "Coffee beans", -1_450),
        (1, "Freelance invoice #42", 120_000),
        (3, "Electricity bill", -8_732),
        (6, "Groceries", -6_418),
        (9, "Bookshop", -2_299),
        (14, "Salary", 310_000),
        (20, "Rent", -145_000),
    ]
    .into_iter()
    .map(|(days_ago, description, amount_cents)| Transaction {
        date: today - Duration::days(days_ago),
        description: description.to_string(),
        amount_cents,
    })
    .collect()
}

/// Parse a decimal amount such as `12`, `-3.5` or `0.99` into cents.
#[must_use]
pub fn parse_cents(input: &str) -> Option<i64> {
    let input = input.trim();
    let (negative, digits) = input
        .strip_prefix('-')
        .map_or((false, input), |rest| (true, rest));
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok().filter(|_| whole.chars().all(|c| c.is_ascii_digit()))?
    };
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };

    let cents = whole.checked_mul(100)?.checked_add(fraction)?;
    Some(if negative { -cents } else { cents })
}

/// The two text fields of the new-transaction form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub fields: [String; 2],
}

impl Form {
    /// Validate the form into a description and an amount in cents.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the invalid field
    pub fn parse(&self) -> Result<(String, i64), &'static str> {
        let description = self.fields[DESCRIPTION_FIELD].trim();
        if description.is_empty() {
            return Err("Description is required");
        }
        let amount = parse_cents(&self.fields[AMOUNT_FIELD]).ok_or("Amount must look like 12.50")?;
        Ok((description.to_string(), amount))
    }
}

/// Caller side of the "New transaction" dialog.
#[derive(Debug, Default)]
pub struct NewTransactionFlow {
    pub open: bool,
    pub form: Form,
    /// Remaining ticks of a simulated save; `Some` while loading.
    pub saving: Option<u16>,
    pub error: Option<String>,
}

impl NewTransactionFlow {
    fn submit(&mut self) {
        match self.form.parse() {
            Ok(_) => {
                self.error = None;
                self.saving = Some(SAVE_TICKS);
                info!("Saving new transaction");
            }
            Err(message) => self.error = Some(message.to_string()),
        }
    }

    /// Whether the dialog should render its loading placeholder.
    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.saving.is_some()
    }
}

impl DialogHandler for NewTransactionFlow {
    fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn on_close(&mut self, reason: DismissReason) {
        info!(?reason, "New transaction dialog dismissed");
        self.error = None;
    }

    fn on_action(&mut self, slot: ActionSlot) {
        match slot {
            ActionSlot::Primary => self.submit(),
            ActionSlot::Secondary => {
                self.set_open(false);
                self.error = None;
            }
        }
    }
}

/// Caller side of the "Delete transaction" dialog.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeleteFlow {
    pub open: bool,
}

impl DialogHandler for DeleteFlow {
    fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn on_close(&mut self, reason: DismissReason) {
        info!(?reason, "Delete dialog dismissed");
    }
}

/// Everything the transactions page owns.
#[derive(Debug)]
pub struct Page {
    pub today: NaiveDate,
    pub transactions: Vec<Transaction>,
    pub selected: usize,
    pub fullscreen: bool,
    pub status: String,
    pub new_tx: NewTransactionFlow,
    pub new_state: DialogState,
    pub delete: DeleteFlow,
    pub delete_state: DialogState,
}

impl Page {
    /// Create the page with mock data relative to `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            transactions: mock_transactions(today),
            selected: 0,
            fullscreen: false,
            status: String::new(),
            new_tx: NewTransactionFlow::default(),
            new_state: DialogState::new(),
            delete: DeleteFlow::default(),
            delete_state: DialogState::new(),
        }
    }

    /// Currently selected transaction, if any.
    #[must_use]
    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions.get(self.selected)
    }

    pub fn open_new(&mut self) {
        self.new_tx.form = Form::default();
        self.new_tx.error = None;
        self.new_tx.open = true;
    }

    pub fn open_delete(&mut self) {
        if self.selected_transaction().is_some() {
            self.delete.open = true;
        }
    }

    pub fn confirm_delete(&mut self) {
        if self.selected < self.transactions.len() {
            let removed = self.transactions.remove(self.selected);
            self.status = format!("Deleted \"{}\"", removed.description);
            info!(description = %removed.description, "Transaction deleted");
        }
        self.selected = self.selected.min(self.transactions.len().saturating_sub(1));
        self.delete.open = false;
    }

    pub const fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    pub const fn select_next(&mut self) {
        if self.selected + 1 < self.transactions.len() {
            self.selected += 1;
        }
    }

    pub const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Advance the simulated save; the dialog closes when it completes.
    pub fn tick(&mut self) {
        let Some(left) = self.new_tx.saving else {
            return;
        };
        if left > 1 {
            self.new_tx.saving = Some(left - 1);
            return;
        }

        self.new_tx.saving = None;
        match self.new_tx.form.parse() {
            Ok((description, amount_cents)) => {
                self.status = format!("Saved \"{description}\"");
                self.transactions.insert(
                    0,
                    Transaction {
                        date: self.today,
                        description,
                        amount_cents,
                    },
                );
                self.selected = 0;
                self.new_tx.form = Form::default();
                self.new_tx.set_open(false);
            }
            Err(message) => self.new_tx.error = Some(message.to_string()),
        }
    }

    /// Feed an event the dialog ignored to the focused form field.
    ///
    /// Returns `true` when the field changed.
    pub fn edit_form(&mut self, event: &Event, focused_field: Option<usize>) -> bool {
        let (Some(field), Event::Key(key)) = (focused_field, event) else {
            return false;
        };
        if key.kind == KeyEventKind::Release {
            return false;
        }
        let Some(value) = self.new_tx.form.fields.get_mut(field) else {
            return false;
        };

        match key.code {
            KeyCode::Char(c) => value.push(c),
            KeyCode::Backspace => {
                value.pop();
            }
            _ => return false,
        }
        self.new_tx.error = None;
        true
    }
}
