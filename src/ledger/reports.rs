//! Derived views over the ledger
//!
//! These are plain values computed from the transaction list and budgets;
//! nothing here is persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Budget, Money, Transaction, TransactionType};

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The month, formatted `YYYY-MM`
    pub month: String,
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses
    pub net_income: Money,
    /// Only categories with at least one expense appear here
    pub expense_by_category: BTreeMap<String, Money>,
    /// Only categories with at least one income entry appear here
    pub income_by_category: BTreeMap<String, Money>,
}

impl MonthlySummary {
    /// Summarise the transactions that fall in `year`-`month`
    pub fn for_month<'a, I>(year: i32, month: u32, transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut expense_by_category: BTreeMap<String, Money> = BTreeMap::new();
        let mut income_by_category: BTreeMap<String, Money> = BTreeMap::new();

        for txn in transactions.into_iter().filter(|t| t.in_month(year, month)) {
            let (total, by_category) = match txn.transaction_type {
                TransactionType::Income => (&mut total_income, &mut income_by_category),
                TransactionType::Expense => (&mut total_expenses, &mut expense_by_category),
            };
            *total += txn.amount;
            *by_category.entry(txn.category.clone()).or_default() += txn.amount;
        }

        Self {
            month: format!("{}-{:02}", year, month),
            total_income,
            total_expenses,
            net_income: total_income - total_expenses,
            expense_by_category,
            income_by_category,
        }
    }
}

/// Status of one budget for the current month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub current_spent: Money,
    pub monthly_limit: Money,
    /// Limit minus spent; negative when over budget
    pub remaining: Money,
    /// Spent as a percentage of the limit; 0 when the limit is not positive
    pub percentage: f64,
    pub over_budget: bool,
}

impl From<&Budget> for BudgetStatus {
    fn from(budget: &Budget) -> Self {
        Self {
            current_spent: budget.current_spent,
            monthly_limit: budget.monthly_limit,
            remaining: budget.remaining(),
            percentage: budget.percentage(),
            over_budget: budget.is_over_budget(),
        }
    }
}

/// Everything the dashboard shows in one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub balance: Money,
    pub recent_transactions: Vec<Transaction>,
    pub budget_status: BTreeMap<String, BudgetStatus>,
    pub monthly_summary: MonthlySummary,
}
