//! The ledger: transactions, budgets and everything derived from them
//!
//! A [`Ledger`] owns the full state in memory and rewrites its backing file
//! after every change. It does no locking of its own; a caller sharing one
//! ledger between threads must serialise access (the HTTP layer wraps it in a
//! mutex).
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_ledger::ledger::Ledger;
//! use pocket_ledger::models::{Money, TransactionType};
//!
//! let mut ledger = Ledger::open("finance_data.json");
//! ledger.set_budget("food", Money::from_cents(20000))?;
//! ledger.add_transaction(Money::from_cents(5000), "food", "lunch", TransactionType::Expense, None)?;
//! let status = ledger.get_budget_status();
//! ```

pub mod reports;

pub use reports::{BudgetStatus, Dashboard, MonthlySummary};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, NaiveDate};
use tracing::{info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Money, Transaction, TransactionId, TransactionType};
use crate::storage::{LedgerFile, LedgerStore};

/// Source of "today" for default dates and the current budget month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// The machine's local date
    #[default]
    Local,
    /// A pinned date, for tests and reproducible reports
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Self::Local => Local::now().date_naive(),
            Self::Fixed(date) => *date,
        }
    }
}

/// In-memory ledger bound to a JSON file
#[derive(Debug)]
pub struct Ledger {
    store: LedgerStore,
    /// Insertion order is preserved
    transactions: Vec<Transaction>,
    budgets: BTreeMap<String, Budget>,
    /// Sequence number for the next generated id; never handed out twice
    next_sequence: u64,
    clock: Clock,
}

impl Ledger {
    /// Create an empty ledger bound to `path` without reading it
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: LedgerStore::new(path),
            transactions: Vec::new(),
            budgets: BTreeMap::new(),
            next_sequence: 1,
            clock: Clock::Local,
        }
    }

    /// Create a ledger bound to `path` and load whatever is stored there
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut ledger = Self::new(path);
        ledger.load();
        ledger
    }

    /// Replace the clock used for "today"
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Today's date according to the ledger's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Reload state from the backing file
    ///
    /// A missing file or one that cannot be parsed leaves the ledger empty.
    /// The failure is logged, never returned.
    pub fn load(&mut self) {
        self.transactions.clear();
        self.budgets.clear();

        match self.store.load() {
            Ok(Some(snapshot)) => {
                self.transactions = snapshot.transactions;
                self.budgets = snapshot
                    .budgets
                    .into_iter()
                    .map(|b| (b.category.clone(), b))
                    .collect();
                info!(
                    path = %self.path().display(),
                    transactions = self.transactions.len(),
                    budgets = self.budgets.len(),
                    "loaded ledger"
                );
            }
            Ok(None) => {
                info!(path = %self.path().display(), "no data file found, starting fresh");
            }
            Err(e) => {
                warn!(path = %self.path().display(), error = %e, "data file unreadable, starting fresh");
            }
        }

        self.next_sequence = self.first_free_sequence();
    }

    /// Rewrite the backing file with the full current state
    pub fn save(&self) -> LedgerResult<()> {
        let snapshot = LedgerFile {
            transactions: self.transactions.clone(),
            budgets: self.budgets.values().cloned().collect(),
        };
        self.store.save(&snapshot)
    }

    /// Record a new transaction and persist
    ///
    /// `date` defaults to today. When the transaction is an expense in a
    /// budgeted category, that budget's spent amount is refreshed. If the
    /// write fails the transaction stays in memory and the error is returned.
    pub fn add_transaction(
        &mut self,
        amount: Money,
        category: &str,
        description: &str,
        transaction_type: TransactionType,
        date: Option<NaiveDate>,
    ) -> LedgerResult<Transaction> {
        let date = date.unwrap_or_else(|| self.clock.today());
        let id = TransactionId::generate(transaction_type, self.next_sequence, date);
        self.next_sequence += 1;

        let txn = Transaction::new(id, date, amount, category, description, transaction_type);
        self.transactions.push(txn.clone());

        if txn.is_expense() && self.budgets.contains_key(category) {
            self.refresh_budget(category);
        }

        info!(id = %txn.id, amount = %txn.amount, category, "added transaction");
        self.save()?;
        Ok(txn)
    }

    /// Create or update the budget for `category` and persist
    pub fn set_budget(&mut self, category: &str, monthly_limit: Money) -> LedgerResult<Budget> {
        self.budgets
            .entry(category.to_string())
            .and_modify(|b| b.monthly_limit = monthly_limit)
            .or_insert_with(|| Budget::new(category, monthly_limit));
        self.refresh_budget(category);

        info!(category, limit = %monthly_limit, "set budget");
        self.save()?;

        self.budgets
            .get(category)
            .cloned()
            .ok_or_else(|| LedgerError::budget_not_found(category))
    }

    /// Remove the transaction with `id`
    ///
    /// Returns `Ok(false)` when no transaction matches; nothing is written in
    /// that case. Budget spent amounts are refreshed on the next status query.
    pub fn delete_transaction(&mut self, id: &str) -> LedgerResult<bool> {
        let Some(index) = self.transactions.iter().position(|t| t.id == *id) else {
            return Ok(false);
        };

        let removed = self.transactions.remove(index);
        info!(id = %removed.id, "deleted transaction");
        self.save()?;
        Ok(true)
    }

    /// Total income minus total expenses over every transaction
    pub fn get_balance(&self) -> Money {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    /// Totals and per-category breakdown for one calendar month
    pub fn get_monthly_summary(&self, year: i32, month: u32) -> MonthlySummary {
        MonthlySummary::for_month(year, month, &self.transactions)
    }

    /// Up to `limit` transactions, newest date first
    ///
    /// Transactions on the same day keep their insertion order.
    pub fn get_recent_transactions(&self, limit: usize) -> Vec<&Transaction> {
        let mut recent: Vec<&Transaction> = self.transactions.iter().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(limit);
        recent
    }

    /// Refresh every budget and report it against the current month
    pub fn get_budget_status(&mut self) -> BTreeMap<String, BudgetStatus> {
        let categories: Vec<String> = self.budgets.keys().cloned().collect();
        for category in &categories {
            self.refresh_budget(category);
        }

        self.budgets
            .iter()
            .map(|(category, budget)| (category.clone(), BudgetStatus::from(budget)))
            .collect()
    }

    /// Balance, recent transactions, budget status and this month's summary
    pub fn dashboard(&mut self, recent_limit: usize) -> Dashboard {
        let today = self.clock.today();
        let budget_status = self.get_budget_status();

        Dashboard {
            balance: self.get_balance(),
            recent_transactions: self
                .get_recent_transactions(recent_limit)
                .into_iter()
                .cloned()
                .collect(),
            budget_status,
            monthly_summary: self.get_monthly_summary(today.year(), today.month()),
        }
    }

    /// Look up a transaction by id
    pub fn find_transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == *id)
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Budgets ordered by category
    pub fn budgets(&self) -> impl Iterator<Item = &Budget> {
        self.budgets.values()
    }

    /// The budget for `category`, as last refreshed
    pub fn budget(&self, category: &str) -> Option<&Budget> {
        self.budgets.get(category)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Recompute `current_spent` for `category` from this month's expenses
    fn refresh_budget(&mut self, category: &str) {
        let today = self.clock.today();
        let spent: Money = self
            .transactions
            .iter()
            .filter(|t| {
                t.is_expense() && t.category == category && t.in_month(today.year(), today.month())
            })
            .map(|t| t.amount)
            .sum();

        if let Some(budget) = self.budgets.get_mut(category) {
            budget.current_spent = spent;
        }
    }

    /// One past the highest sequence in use, counting foreign ids by position
    fn first_free_sequence(&self) -> u64 {
        let highest = self
            .transactions
            .iter()
            .filter_map(|t| t.id.sequence())
            .max()
            .unwrap_or(0);
        highest.max(self.transactions.len() as u64) + 1
    }
}
