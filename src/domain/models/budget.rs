use serde::{Deserialize, Serialize};

/// A per-category spending ceiling for a period
///
/// One budget exists per category; setting a category that already has a
/// budget replaces its limit. A zero limit is a real budget of zero, not an
/// unset budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    /// Non-negative period spending ceiling
    pub limit: f64,
}

impl Budget {
    pub fn validate(category: &str, limit: f64) -> Result<(), BudgetValidationError> {
        if category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }
        if !limit.is_finite() {
            return Err(BudgetValidationError::LimitNotFinite);
        }
        if limit < 0.0 {
            return Err(BudgetValidationError::NegativeLimit);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BudgetValidationError {
    #[error("Category cannot be empty")]
    EmptyCategory,
    #[error("Limit cannot be negative")]
    NegativeLimit,
    #[error("Limit must be a finite number")]
    LimitNotFinite,
}
