use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;

use super::traits::BlobStore;
use crate::domain::models::expense::Expense;

/// Key under which the serialized expense collection is persisted
const EXPENSES_KEY: &str = "expenses";

/// Expense collection persistence over a blob store
///
/// Every mutation reads the full collection, applies the change in memory,
/// and writes the full collection back under a fixed key. There is no delta
/// persistence and no transaction log; the execution model is serial, so
/// read-then-write is safe.
#[derive(Clone)]
pub struct ExpenseRepository<S: BlobStore> {
    store: Arc<S>,
}

impl<S: BlobStore> ExpenseRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn read_all(&self) -> Result<Vec<Expense>> {
        match self.store.read(EXPENSES_KEY)? {
            Some(blob) => {
                serde_json::from_str(&blob).context("Failed to parse stored expense collection")
            }
            None => Ok(Vec::new()),
        }
    }

    fn write_all(&self, expenses: &[Expense]) -> Result<()> {
        let blob =
            serde_json::to_string(expenses).context("Failed to serialize expense collection")?;
        self.store.write(EXPENSES_KEY, &blob)
    }

    /// Append a new expense and persist the collection
    pub fn store_expense(&self, expense: &Expense) -> Result<()> {
        let mut expenses = self.read_all()?;
        expenses.push(expense.clone());
        self.write_all(&expenses)?;

        info!("Stored expense {}", expense.id);
        Ok(())
    }

    /// Retrieve a specific expense by id
    pub fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>> {
        let expenses = self.read_all()?;
        Ok(expenses.into_iter().find(|e| e.id == expense_id))
    }

    /// Replace an existing expense in place
    ///
    /// Returns `true` if the expense was found and updated, `false` if no
    /// expense with that id exists (the collection is left untouched).
    pub fn update_expense(&self, expense: &Expense) -> Result<bool> {
        let mut expenses = self.read_all()?;

        if let Some(existing) = expenses.iter_mut().find(|e| e.id == expense.id) {
            *existing = expense.clone();
            self.write_all(&expenses)?;
            info!("Updated expense {}", expense.id);
            Ok(true)
        } else {
            warn!("Expense not found for update: {}", expense.id);
            Ok(false)
        }
    }

    /// Delete an expense by id
    ///
    /// Returns `true` if the expense was found and deleted, `false` otherwise.
    pub fn delete_expense(&self, expense_id: &str) -> Result<bool> {
        let mut expenses = self.read_all()?;
        let initial_len = expenses.len();

        expenses.retain(|e| e.id != expense_id);

        if expenses.len() < initial_len {
            self.write_all(&expenses)?;
            info!("Deleted expense {}", expense_id);
            Ok(true)
        } else {
            warn!("Expense not found for deletion: {}", expense_id);
            Ok(false)
        }
    }

    /// Empty the collection and persist the empty state
    pub fn clear_expenses(&self) -> Result<()> {
        self.write_all(&[])?;
        info!("Cleared all expenses");
        Ok(())
    }

    /// List the full collection in insertion order
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.read_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use chrono::NaiveDate;

    fn test_expense(id: &str, amount: f64, category: &str) -> Expense {
        Expense {
            id: id.to_string(),
            amount,
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            note: None,
        }
    }

    fn setup_repo() -> ExpenseRepository<MemoryStore> {
        ExpenseRepository::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_store_and_list_preserves_insertion_order() {
        let repo = setup_repo();

        repo.store_expense(&test_expense("b", 20.0, "Travel")).unwrap();
        repo.store_expense(&test_expense("a", 10.0, "Food")).unwrap();
        repo.store_expense(&test_expense("c", 30.0, "Food")).unwrap();

        let ids: Vec<String> = repo
            .list_expenses()
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_get_expense() {
        let repo = setup_repo();
        repo.store_expense(&test_expense("a", 10.0, "Food")).unwrap();

        let found = repo.get_expense("a").unwrap();
        assert_eq!(found.unwrap().amount, 10.0);
        assert!(repo.get_expense("missing").unwrap().is_none());
    }

    #[test]
    fn test_update_missing_expense_is_noop() {
        let repo = setup_repo();
        repo.store_expense(&test_expense("a", 10.0, "Food")).unwrap();

        let updated = repo.update_expense(&test_expense("ghost", 99.0, "Food")).unwrap();
        assert!(!updated);
        assert_eq!(repo.list_expenses().unwrap(), vec![test_expense("a", 10.0, "Food")]);
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let repo = setup_repo();
        repo.store_expense(&test_expense("a", 10.0, "Food")).unwrap();

        let mut replacement = test_expense("a", 25.0, "Groceries");
        replacement.note = Some("weekly shop".to_string());
        assert!(repo.update_expense(&replacement).unwrap());

        let stored = repo.get_expense("a").unwrap().unwrap();
        assert_eq!(stored, replacement);
    }

    #[test]
    fn test_delete_twice_is_idempotent() {
        let repo = setup_repo();
        repo.store_expense(&test_expense("a", 10.0, "Food")).unwrap();

        assert!(repo.delete_expense("a").unwrap());
        assert!(!repo.delete_expense("a").unwrap());
        assert!(repo.list_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_clear_expenses() {
        let repo = setup_repo();
        repo.store_expense(&test_expense("a", 10.0, "Food")).unwrap();
        repo.store_expense(&test_expense("b", 20.0, "Travel")).unwrap();

        repo.clear_expenses().unwrap();
        assert!(repo.list_expenses().unwrap().is_empty());
    }
}
