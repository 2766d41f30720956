//! Reporting calculator: pure aggregation over expense and budget snapshots.
//!
//! Every function here takes the current snapshot by reference and derives
//! view-ready aggregates. Nothing is stored, nothing is mutated, and the
//! clock is never read; the caller supplies the reporting window, so an
//! identical snapshot always produces an identical report.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::models::expense::Expense;

/// Inclusive calendar date window for time-based totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Window covering one calendar month; `None` for an invalid month number
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = start.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Budget-vs-actual standing for one category
///
/// `limit`, `remaining`, and `utilization` are `None` for categories with no
/// budget. `remaining` may be negative (overspend). `utilization` is also
/// `None` for a zero limit, where the ratio is undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub category: String,
    pub spent: f64,
    pub limit: Option<f64>,
    pub remaining: Option<f64>,
    pub utilization: Option<f64>,
}

/// Sum of amounts grouped by category, over the whole snapshot
pub fn totals_by_category(expenses: &[Expense]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    totals
}

/// Sum of amounts for expenses dated within the window
pub fn total_in_window(expenses: &[Expense], window: &DateWindow) -> f64 {
    expenses
        .iter()
        .filter(|e| window.contains(e.date))
        .map(|e| e.amount)
        .sum()
}

/// Per-category sums restricted to expenses dated within the window
pub fn totals_by_category_in_window(
    expenses: &[Expense],
    window: &DateWindow,
) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses.iter().filter(|e| window.contains(e.date)) {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    totals
}

/// Budget-vs-actual report across every category in either snapshot
///
/// Categories with spending but no budget appear spend-only; categories with
/// a budget but no spending appear with `spent = 0`. Rows are ordered by
/// category name.
pub fn budget_report(
    expenses: &[Expense],
    budgets: &BTreeMap<String, f64>,
) -> Vec<CategoryReport> {
    let spent_by_category = totals_by_category(expenses);

    let categories: BTreeSet<&String> = spent_by_category
        .keys()
        .chain(budgets.keys())
        .collect();

    categories
        .into_iter()
        .map(|category| {
            let spent = spent_by_category.get(category).copied().unwrap_or(0.0);
            let limit = budgets.get(category).copied();
            let remaining = limit.map(|l| l - spent);
            // Utilization is undefined for a zero limit, never a division
            let utilization = limit.filter(|l| *l > 0.0).map(|l| spent / l);

            CategoryReport {
                category: category.clone(),
                spent,
                limit,
                remaining,
                utilization,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: f64, date: &str) -> Expense {
        Expense {
            id: format!("{}-{}", category, amount),
            amount,
            category: category.to_string(),
            date: date.parse().unwrap(),
            note: None,
        }
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            expense("Food", 100.0, "2025-05-03"),
            expense("Food", 50.0, "2025-05-20"),
            expense("Travel", 30.0, "2025-04-28"),
        ]
    }

    #[test]
    fn test_totals_by_category() {
        let totals = totals_by_category(&sample_expenses());
        assert_eq!(totals.get("Food"), Some(&150.0));
        assert_eq!(totals.get("Travel"), Some(&30.0));
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_total_in_window_is_inclusive_of_endpoints() {
        let expenses = vec![
            expense("Food", 10.0, "2025-05-01"),
            expense("Food", 20.0, "2025-05-31"),
            expense("Food", 40.0, "2025-06-01"),
        ];
        let may = DateWindow::month(2025, 5).unwrap();
        assert_eq!(total_in_window(&expenses, &may), 30.0);
    }

    #[test]
    fn test_totals_by_category_in_window() {
        let may = DateWindow::month(2025, 5).unwrap();
        let totals = totals_by_category_in_window(&sample_expenses(), &may);
        assert_eq!(totals.get("Food"), Some(&150.0));
        assert_eq!(totals.get("Travel"), None);
    }

    #[test]
    fn test_month_window_bounds() {
        let feb = DateWindow::month(2024, 2).unwrap();
        assert_eq!(feb.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(feb.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(DateWindow::month(2024, 13).is_none());
    }

    #[test]
    fn test_budget_report_overspend_and_spend_only() {
        let mut budgets = BTreeMap::new();
        budgets.insert("Food".to_string(), 120.0);

        let report = budget_report(&sample_expenses(), &budgets);
        assert_eq!(report.len(), 2);

        let food = &report[0];
        assert_eq!(food.category, "Food");
        assert_eq!(food.spent, 150.0);
        assert_eq!(food.limit, Some(120.0));
        assert_eq!(food.remaining, Some(-30.0));
        assert_eq!(food.utilization, Some(1.25));

        let travel = &report[1];
        assert_eq!(travel.category, "Travel");
        assert_eq!(travel.spent, 30.0);
        assert_eq!(travel.limit, None);
        assert_eq!(travel.remaining, None);
        assert_eq!(travel.utilization, None);
    }

    #[test]
    fn test_budget_report_unspent_category_appears() {
        let mut budgets = BTreeMap::new();
        budgets.insert("Rent".to_string(), 800.0);

        let report = budget_report(&[], &budgets);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].spent, 0.0);
        assert_eq!(report[0].remaining, Some(800.0));
        assert_eq!(report[0].utilization, Some(0.0));
    }

    #[test]
    fn test_zero_limit_guards_division() {
        let mut budgets = BTreeMap::new();
        budgets.insert("Impulse".to_string(), 0.0);

        let expenses = vec![expense("Impulse", 15.0, "2025-05-10")];
        let report = budget_report(&expenses, &budgets);

        let row = &report[0];
        assert_eq!(row.spent, 15.0);
        assert_eq!(row.limit, Some(0.0));
        assert_eq!(row.remaining, Some(-15.0));
        assert_eq!(row.utilization, None);
    }

    #[test]
    fn test_report_is_deterministic() {
        let mut budgets = BTreeMap::new();
        budgets.insert("Food".to_string(), 120.0);

        let expenses = sample_expenses();
        assert_eq!(
            budget_report(&expenses, &budgets),
            budget_report(&expenses, &budgets)
        );
    }
}
