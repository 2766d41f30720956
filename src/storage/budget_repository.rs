use anyhow::{Context, Result};
use log::info;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::traits::BlobStore;

/// Key under which the serialized budget mapping is persisted
const BUDGETS_KEY: &str = "budgets";

/// Budget mapping persistence over a blob store
///
/// Budgets are a category-to-limit map; the map key enforces the one-budget-
/// per-category invariant. No delete operation exists, budgets are only ever
/// inserted or replaced.
#[derive(Clone)]
pub struct BudgetRepository<S: BlobStore> {
    store: Arc<S>,
}

impl<S: BlobStore> BudgetRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn read_all(&self) -> Result<BTreeMap<String, f64>> {
        match self.store.read(BUDGETS_KEY)? {
            Some(blob) => {
                serde_json::from_str(&blob).context("Failed to parse stored budget mapping")
            }
            None => Ok(BTreeMap::new()),
        }
    }

    fn write_all(&self, budgets: &BTreeMap<String, f64>) -> Result<()> {
        let blob = serde_json::to_string(budgets).context("Failed to serialize budget mapping")?;
        self.store.write(BUDGETS_KEY, &blob)
    }

    /// Upsert the budget limit for a category and persist the mapping
    pub fn set_budget(&self, category: &str, limit: f64) -> Result<()> {
        let mut budgets = self.read_all()?;
        budgets.insert(category.to_string(), limit);
        self.write_all(&budgets)?;

        info!("Set budget for category '{}' to {:.2}", category, limit);
        Ok(())
    }

    /// List the full category-to-limit mapping
    pub fn list_budgets(&self) -> Result<BTreeMap<String, f64>> {
        self.read_all()
    }
}
