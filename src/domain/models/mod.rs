pub mod budget;
pub mod expense;

pub use budget::{Budget, BudgetValidationError};
pub use expense::{Expense, ExpenseValidationError, NewExpense, MAX_NOTE_LENGTH};
