//! Expense store operations: create, update, delete, clear, list.

use anyhow::Result;
use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::models::expense::{Expense, NewExpense};
use crate::storage::{BlobStore, ExpenseRepository};

/// Service owning the expense collection
///
/// Validates input, assigns ids, and persists every mutation through the
/// repository. A persistence failure surfaces as an error from the mutating
/// call; the in-memory view is never left ahead of the stored one.
#[derive(Clone)]
pub struct ExpenseService<S: BlobStore> {
    repository: ExpenseRepository<S>,
}

impl<S: BlobStore> ExpenseService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            repository: ExpenseRepository::new(store),
        }
    }

    /// Create a new expense with a fresh unique id and persist it
    pub fn add_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        new_expense.validate()?;

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            amount: new_expense.amount,
            category: new_expense.category.trim().to_string(),
            date: new_expense.date,
            note: new_expense.note,
        };

        self.repository.store_expense(&expense)?;
        info!(
            "Added expense {} ({}: {:.2})",
            expense.id, expense.category, expense.amount
        );
        Ok(expense)
    }

    /// Replace all fields of an existing expense (the id is the lookup key)
    ///
    /// Updating an id that no longer exists is a silent no-op and returns
    /// `Ok(None)`; the caller may have raced a delete and that is fine.
    pub fn update_expense(&self, expense: Expense) -> Result<Option<Expense>> {
        expense.validate()?;

        let expense = Expense {
            category: expense.category.trim().to_string(),
            ..expense
        };

        if self.repository.update_expense(&expense)? {
            Ok(Some(expense))
        } else {
            Ok(None)
        }
    }

    /// Delete an expense by id; returns whether anything was deleted
    pub fn delete_expense(&self, expense_id: &str) -> Result<bool> {
        self.repository.delete_expense(expense_id)
    }

    /// Remove every expense and persist the empty collection
    pub fn clear_all(&self) -> Result<()> {
        self.repository.clear_expenses()
    }

    /// Retrieve a specific expense by id
    pub fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>> {
        self.repository.get_expense(expense_id)
    }

    /// List all expenses in insertion order
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.repository.list_expenses()
    }
}
