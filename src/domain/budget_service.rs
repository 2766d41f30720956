//! Budget store operations: upsert and list per-category limits.

use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::models::budget::Budget;
use crate::storage::{BlobStore, BudgetRepository};

/// Service owning the per-category budget mapping
#[derive(Clone)]
pub struct BudgetService<S: BlobStore> {
    repository: BudgetRepository<S>,
}

impl<S: BlobStore> BudgetService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            repository: BudgetRepository::new(store),
        }
    }

    /// Upsert the budget for a category and persist the mapping
    ///
    /// Setting a category that already has a budget replaces its limit.
    pub fn set_budget(&self, category: &str, limit: f64) -> Result<Budget> {
        Budget::validate(category, limit)?;

        let category = category.trim().to_string();
        self.repository.set_budget(&category, limit)?;
        Ok(Budget { category, limit })
    }

    /// List the full category-to-limit mapping
    pub fn list_budgets(&self) -> Result<BTreeMap<String, f64>> {
        self.repository.list_budgets()
    }
}
