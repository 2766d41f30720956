//! Data core for a device-local personal expense tracker.
//!
//! Users record expenses, set per-category budgets, and derive spending
//! reports. State persists through an injectable [`BlobStore`] backend scoped
//! to one device; there is no server, no sync, and no UI in this crate. All
//! operations are synchronous and run to completion, matching the
//! event-at-a-time execution model of the consuming presentation layer.
//!
//! ```no_run
//! use expense_tracker_core::{ExpenseTracker, NewExpense};
//! use expense_tracker_core::storage::JsonFileStore;
//! use std::sync::Arc;
//!
//! # fn main() -> anyhow::Result<()> {
//! let tracker = ExpenseTracker::new(Arc::new(JsonFileStore::new_default()?));
//! tracker.expenses().add_expense(NewExpense {
//!     amount: 12.50,
//!     category: "Food".to_string(),
//!     date: "2025-06-15".parse()?,
//!     note: Some("lunch".to_string()),
//! })?;
//! let report = tracker.budget_report()?;
//! # let _ = report;
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod storage;

use anyhow::Result;
use std::sync::Arc;

pub use domain::models::{Budget, Expense, NewExpense};
pub use domain::{CategoryReport, DateWindow};
pub use storage::BlobStore;

use domain::{report_service, BudgetService, ExpenseService};

/// The full action surface consumed by a presentation layer
///
/// Bundles the expense and budget services over one shared backend and glues
/// current snapshots into reports. Orchestration beyond these data operations
/// (navigation, confirmation prompts) belongs to the caller.
pub struct ExpenseTracker<S: BlobStore> {
    expenses: ExpenseService<S>,
    budgets: BudgetService<S>,
}

impl<S: BlobStore> ExpenseTracker<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            expenses: ExpenseService::new(store.clone()),
            budgets: BudgetService::new(store),
        }
    }

    pub fn expenses(&self) -> &ExpenseService<S> {
        &self.expenses
    }

    pub fn budgets(&self) -> &BudgetService<S> {
        &self.budgets
    }

    /// Budget-vs-actual report over the current snapshot
    pub fn budget_report(&self) -> Result<Vec<CategoryReport>> {
        let expenses = self.expenses.list_expenses()?;
        let budgets = self.budgets.list_budgets()?;
        Ok(report_service::budget_report(&expenses, &budgets))
    }

    /// Per-category totals restricted to the given window
    pub fn window_report(&self, window: &DateWindow) -> Result<std::collections::BTreeMap<String, f64>> {
        let expenses = self.expenses.list_expenses()?;
        Ok(report_service::totals_by_category_in_window(&expenses, window))
    }
}
