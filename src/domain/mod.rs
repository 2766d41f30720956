//! # Domain Module
//!
//! Business logic for the expense tracker core, independent of any UI and of
//! the concrete storage backend.
//!
//! - **expense_service**: expense CRUD with validation and id assignment
//! - **budget_service**: per-category budget upserts
//! - **report_service**: pure aggregation over snapshots (totals, windows,
//!   budget-vs-actual)
//! - **models**: serde data types and their validation rules
//!
//! Business rules: amounts are strictly positive, categories are non-empty
//! user-chosen labels, budget limits are non-negative, and expense categories
//! are not required to match budget categories (open-world by design).

pub mod budget_service;
pub mod expense_service;
pub mod models;
pub mod report_service;

pub use budget_service::BudgetService;
pub use expense_service::ExpenseService;
pub use report_service::{
    budget_report, total_in_window, totals_by_category, totals_by_category_in_window,
    CategoryReport, DateWindow,
};
