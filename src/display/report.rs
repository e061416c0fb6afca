//! Report formatting for terminal output
//!
//! Monthly summaries, budget status and the combined dashboard.

use std::collections::BTreeMap;

use crate::ledger::{BudgetStatus, Dashboard, MonthlySummary};
use crate::models::Money;

use super::transaction::{format_transaction_register, truncate};

const WIDTH: usize = 60;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation, capped at `width`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

fn format_breakdown(title: &str, by_category: &BTreeMap<String, Money>, symbol: &str) -> String {
    let mut output = format!("{}:\n", title);
    if by_category.is_empty() {
        output.push_str("  (none)\n");
        return output;
    }
    for (category, amount) in by_category {
        output.push_str(&format!(
            "  {:<24} {:>14}\n",
            truncate(category, 24),
            amount.format_with_symbol(symbol)
        ));
    }
    output
}

/// Format a monthly summary with per-category breakdowns
pub fn format_monthly_summary(summary: &MonthlySummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Summary for {}\n", summary.month));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Income:   {:>14}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Expenses: {:>14}\n",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net:      {:>14}\n",
        summary.net_income.format_with_symbol(symbol)
    ));
    output.push('\n');
    output.push_str(&format_breakdown("Income by category", &summary.income_by_category, symbol));
    output.push_str(&format_breakdown("Expenses by category", &summary.expense_by_category, symbol));

    output
}

/// Format budget status, one line per category
pub fn format_budget_status(status: &BTreeMap<String, BudgetStatus>, symbol: &str) -> String {
    if status.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<16} {:>12} {:>12} {:>12} {:>6}  {}\n",
        "Category", "Spent", "Limit", "Remaining", "Used", ""
    ));
    output.push_str(&separator(WIDTH + 20));
    output.push('\n');

    for (category, s) in status {
        let flag = if s.over_budget { "  OVER" } else { "" };
        output.push_str(&format!(
            "{:<16} {:>12} {:>12} {:>12} {:>6}  {}{}\n",
            truncate(category, 16),
            s.current_spent.format_with_symbol(symbol),
            s.monthly_limit.format_with_symbol(symbol),
            s.remaining.format_with_symbol(symbol),
            format_percentage(s.percentage),
            format_bar(s.percentage, 100.0, 10),
            flag
        ));
    }

    output
}

/// Format the full dashboard
pub fn format_dashboard(dashboard: &Dashboard, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Balance: {}\n\n",
        dashboard.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format_monthly_summary(&dashboard.monthly_summary, symbol));
    output.push('\n');
    output.push_str("Budgets\n");
    output.push_str(&format_budget_status(&dashboard.budget_status, symbol));
    output.push('\n');
    output.push_str("Recent transactions\n");
    let recent: Vec<_> = dashboard.recent_transactions.iter().collect();
    output.push_str(&format_transaction_register(&recent, symbol));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(spent: i64, limit: i64) -> BudgetStatus {
        let mut budget = crate::models::Budget::new("x", Money::from_cents(limit));
        budget.current_spent = Money::from_cents(spent);
        BudgetStatus::from(&budget)
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(25.0), "25%");
        assert_eq!(format_percentage(7.26), "7.3%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(format_bar(250.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
    }

    #[test]
    fn test_budget_status_flags_over_budget() {
        let mut map = BTreeMap::new();
        map.insert("food".to_string(), status(5000, 20000));
        map.insert("fun".to_string(), status(3000, 2000));

        let output = format_budget_status(&map, "$");
        let food = output.lines().find(|l| l.starts_with("food")).unwrap();
        let fun = output.lines().find(|l| l.starts_with("fun")).unwrap();

        assert!(food.contains("$150.00"));
        assert!(food.contains("25%"));
        assert!(!food.contains("OVER"));
        assert!(fun.contains("-$10.00"));
        assert!(fun.ends_with("OVER"));
    }

    #[test]
    fn test_empty_budget_status() {
        assert_eq!(format_budget_status(&BTreeMap::new(), "$"), "No budgets set.\n");
    }

    #[test]
    fn test_monthly_summary_lists_categories() {
        let summary = MonthlySummary {
            month: "2024-03".to_string(),
            total_income: Money::from_cents(100000),
            total_expenses: Money::from_cents(3000),
            net_income: Money::from_cents(97000),
            expense_by_category: BTreeMap::from([("food".to_string(), Money::from_cents(3000))]),
            income_by_category: BTreeMap::new(),
        };

        let output = format_monthly_summary(&summary, "$");
        assert!(output.starts_with("Summary for 2024-03"));
        assert!(output.contains("$970.00"));
        assert!(output.contains("food"));
        assert!(output.contains("(none)"));
    }
}
