//! Transaction and category types shared by every SmartBudget crate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::categorizer::categorize;
use crate::time::window_start;

/// Spending categories assigned by keyword match
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "transport")]
    Transport,
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "health")]
    Health,
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "clothing")]
    Clothing,
    #[serde(rename = "technology")]
    Technology,
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    /// Every category, in rule priority order with `Other` last
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Health,
        Category::Home,
        Category::Education,
        Category::Clothing,
        Category::Technology,
        Category::Income,
        Category::Other,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Home => "Home",
            Category::Education => "Education",
            Category::Clothing => "Clothing",
            Category::Technology => "Technology",
            Category::Income => "Income",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A categorized statement transaction.
///
/// Fields are private so the category can only come from [`categorize`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    date: NaiveDate,
    /// Positive = income, negative = expense
    amount: f64,
    description: String,
    category: Category,
}

impl Transaction {
    /// Create a transaction, assigning its category from the description
    pub fn new(date: NaiveDate, amount: f64, description: impl Into<String>) -> Self {
        let description = description.into();
        let category = categorize(&description);
        Self {
            date,
            amount,
            description,
            category,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns true if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}

/// Ordered transactions of one imported statement.
///
/// Immutable once built; a new import builds a new table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionTable {
    rows: Vec<Transaction>,
}

impl TransactionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Categorize raw `(date, amount, description)` rows into a table
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, f64, S)>,
        S: Into<String>,
    {
        rows.into_iter()
            .map(|(date, amount, description)| Transaction::new(date, amount, description))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.rows
    }
}

/// Transactions in the lookback of `days` ending at `now`.
///
/// The start day is included and there is no upper bound.
pub fn in_window(
    transactions: &[Transaction],
    now: NaiveDate,
    days: i64,
) -> impl Iterator<Item = &Transaction> {
    let start = window_start(now, days);
    transactions.iter().filter(move |t| t.date >= start)
}

impl FromIterator<Transaction> for TransactionTable {
    fn from_iter<T: IntoIterator<Item = Transaction>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TransactionTable {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
