use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum length of an expense note in characters
pub const MAX_NOTE_LENGTH: usize = 256;

/// A single recorded spending event
///
/// The `id` is assigned by the expense store at creation and never changes;
/// every other field is replaceable on edit. The `category` is an open set of
/// user-chosen labels and is not required to match any budget category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    /// Spending amount (currency-agnostic, strictly positive)
    pub amount: f64,
    /// Short user-chosen category label
    pub category: String,
    /// Calendar date of the expense (ISO 8601 date, YYYY-MM-DD)
    pub date: NaiveDate,
    /// Optional free-text description (max 256 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Input for creating a new expense; the store assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NewExpense {
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_expense_fields(self.amount, &self.category, self.note.as_deref())
    }
}

impl Expense {
    /// Validate the mutable fields of an expense (everything except `id`)
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_expense_fields(self.amount, &self.category, self.note.as_deref())
    }
}

fn validate_expense_fields(
    amount: f64,
    category: &str,
    note: Option<&str>,
) -> Result<(), ExpenseValidationError> {
    if !amount.is_finite() {
        return Err(ExpenseValidationError::AmountNotFinite);
    }
    if amount <= 0.0 {
        return Err(ExpenseValidationError::AmountNotPositive);
    }
    if category.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyCategory);
    }
    if let Some(note) = note {
        let len = note.chars().count();
        if len > MAX_NOTE_LENGTH {
            return Err(ExpenseValidationError::NoteTooLong(len));
        }
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Amount must be positive")]
    AmountNotPositive,
    #[error("Amount must be a finite number")]
    AmountNotFinite,
    #[error("Category cannot be empty")]
    EmptyCategory,
    #[error("Note is too long ({0} characters, max {MAX_NOTE_LENGTH})")]
    NoteTooLong(usize),
}
