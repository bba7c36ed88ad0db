//! Application state for the dashboard
//!
//! The App struct holds the session, the prediction worker, and all
//! transient input state needed for rendering and handling events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::models::{parse_amount, Category, IncomeSources};
use crate::predict::PredictionWorker;
use crate::services::PlannerSession;

/// Which input field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Arecanut,
    Salary,
    Coconut,
    Title,
    Amount,
    Category,
}

impl Field {
    /// Focus order, top of the dashboard to bottom
    const ORDER: [Field; 6] = [
        Field::Arecanut,
        Field::Salary,
        Field::Coconut,
        Field::Title,
        Field::Amount,
        Field::Category,
    ];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether this field belongs to the income form
    fn is_income(self) -> bool {
        matches!(self, Field::Arecanut | Field::Salary | Field::Coconut)
    }
}

/// Main application state
pub struct App {
    /// The planning session
    pub session: PlannerSession,

    /// Background prediction requests
    pub worker: PredictionWorker,

    /// Currency symbol for display
    pub currency_symbol: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently focused field
    pub focus: Field,

    /// Income form input buffers
    pub arecanut_input: String,
    pub salary_input: String,
    pub coconut_input: String,

    /// Expense form input buffers
    pub title_input: String,
    pub amount_input: String,

    /// Selected index into `Category::all()`
    pub category_index: usize,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create the dashboard app around a session and worker
    pub fn new(session: PlannerSession, worker: PredictionWorker, currency_symbol: String) -> Self {
        let income = *session.income();
        Self {
            session,
            worker,
            currency_symbol,
            should_quit: false,
            focus: Field::default(),
            arecanut_input: format_input(income.arecanut),
            salary_input: format_input(income.salary),
            coconut_input: format_input(income.coconut),
            title_input: String::new(),
            amount_input: String::new(),
            category_index: 0,
            status_message: None,
        }
    }

    /// The category currently selected in the expense form
    pub fn selected_category(&self) -> Category {
        Category::all()[self.category_index % Category::all().len()]
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global shortcuts first
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('p') => {
                    self.request_prediction();
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Enter => self.submit(),
            KeyCode::Left if self.focus == Field::Category => {
                let len = Category::all().len();
                self.category_index = (self.category_index + len - 1) % len;
            }
            KeyCode::Right if self.focus == Field::Category => {
                self.category_index = (self.category_index + 1) % Category::all().len();
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.focused_buffer() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.focused_buffer() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    /// Called on every tick: apply any finished prediction request
    pub fn on_tick(&mut self) {
        if let Some(result) = self.worker.poll() {
            self.session.finish_prediction(result);
        }
    }

    /// Submit the form the focused field belongs to
    fn submit(&mut self) {
        if self.focus.is_income() {
            self.compute_plan();
        } else {
            self.add_expense();
        }
    }

    /// Parse the income fields and compute a plan
    fn compute_plan(&mut self) {
        let fields = [
            ("arecanut", self.arecanut_input.clone()),
            ("salary", self.salary_input.clone()),
            ("coconut", self.coconut_input.clone()),
        ];

        let mut values = [0.0f64; 3];
        for (i, (name, raw)) in fields.iter().enumerate() {
            match parse_amount(raw) {
                Ok(v) => values[i] = v,
                Err(e) => {
                    self.status_message = Some(format!("{} income: {}", name, e));
                    return;
                }
            }
        }

        self.session
            .set_income(IncomeSources::new(values[0], values[1], values[2]));
        match self.session.compute_plan() {
            Ok(plan) => {
                debug!(total = plan.total_income, "plan computed");
                self.status_message = Some("Plan updated.".to_string());
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Parse the expense form and append an entry to the ledger
    fn add_expense(&mut self) {
        let amount = match parse_amount(&self.amount_input) {
            Ok(v) => v,
            Err(e) => {
                self.status_message = Some(format!("amount: {}", e));
                return;
            }
        };

        let title = self.title_input.clone();
        match self.session.add_expense(title, amount, self.selected_category()) {
            Ok(()) => {
                self.title_input.clear();
                self.amount_input.clear();
                self.status_message = Some("Expense added.".to_string());
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Kick off a prediction request for the current ledger total
    fn request_prediction(&mut self) {
        self.session.begin_prediction();
        let seq = self.worker.request(self.session.prediction_history());
        debug!(seq, "prediction requested");
        self.status_message = Some("Requesting prediction...".to_string());
    }

    /// Mutable access to the text buffer behind the focused field
    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Arecanut => Some(&mut self.arecanut_input),
            Field::Salary => Some(&mut self.salary_input),
            Field::Coconut => Some(&mut self.coconut_input),
            Field::Title => Some(&mut self.title_input),
            Field::Amount => Some(&mut self.amount_input),
            Field::Category => None,
        }
    }
}

/// Seed an input buffer from a numeric value, skipping a trailing ".0"
fn format_input(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
