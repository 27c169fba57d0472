//! Financial health score: a 0-100 heuristic over the last 30 days.
//!
//! Starts at 100 and applies independent penalties for the expense/income
//! ratio, irregular day-to-day spending and a food-heavy budget.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smartbudget_core::stats::coefficient_of_variation;
use smartbudget_core::{in_window, Category, Transaction};
use std::collections::BTreeMap;
use std::fmt;

/// Lookback used by the score
pub const SCORE_WINDOW_DAYS: i64 = 30;

const BASE_SCORE: i32 = 100;
const FOOD_SHARE_LIMIT: f64 = 0.4;
const HIGH_RATIO: f64 = 0.8;

/// Score description shown next to the number
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HealthLabel {
    #[serde(rename = "excellent")]
    Excellent,
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "needs attention")]
    NeedsAttention,
    #[serde(rename = "critical")]
    Critical,
    #[serde(rename = "insufficient data")]
    InsufficientData,
}

impl HealthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => HealthLabel::Excellent,
            60..=79 => HealthLabel::Good,
            40..=59 => HealthLabel::NeedsAttention,
            _ => HealthLabel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthLabel::Excellent => "excellent",
            HealthLabel::Good => "good",
            HealthLabel::NeedsAttention => "needs attention",
            HealthLabel::Critical => "critical",
            HealthLabel::InsufficientData => "insufficient data",
        }
    }
}

impl fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deduction applied to the base score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Penalty {
    #[serde(rename = "no-income")]
    NoIncome,
    #[serde(rename = "spending-exceeds-income")]
    SpendingExceedsIncome,
    #[serde(rename = "high-spending-ratio")]
    HighSpendingRatio,
    #[serde(rename = "irregular-spending")]
    IrregularSpending,
    #[serde(rename = "food-concentration")]
    FoodConcentration,
}

impl Penalty {
    pub fn points(&self) -> i32 {
        match self {
            Penalty::NoIncome => 30,
            Penalty::SpendingExceedsIncome => 40,
            Penalty::HighSpendingRatio => 20,
            Penalty::IrregularSpending => 15,
            Penalty::FoodConcentration => 10,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Penalty::NoIncome => "no income in the last 30 days",
            Penalty::SpendingExceedsIncome => "spending exceeds income",
            Penalty::HighSpendingRatio => "spending above 80% of income",
            Penalty::IrregularSpending => "irregular day-to-day spending",
            Penalty::FoodConcentration => "food above 40% of spending",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthScore {
    pub score: u8,
    pub label: HealthLabel,
    /// Deductions in the order they were applied
    pub penalties: Vec<Penalty>,
}

impl HealthScore {
    fn insufficient() -> Self {
        Self {
            score: 0,
            label: HealthLabel::InsufficientData,
            penalties: Vec::new(),
        }
    }
}

fn ratio_penalty(income: f64, expense: f64) -> Option<Penalty> {
    if income <= 0.0 {
        return Some(Penalty::NoIncome);
    }
    let ratio = expense / income;
    if ratio > 1.0 {
        Some(Penalty::SpendingExceedsIncome)
    } else if ratio > HIGH_RATIO {
        Some(Penalty::HighSpendingRatio)
    } else {
        None
    }
}

fn variability_penalty(window: &[&Transaction]) -> Option<Penalty> {
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for t in window.iter().filter(|t| t.is_expense()) {
        *daily.entry(t.date()).or_insert(0.0) += t.abs_amount();
    }
    let sums: Vec<f64> = daily.into_values().collect();
    match coefficient_of_variation(&sums) {
        Some(cv) if cv > 1.0 => Some(Penalty::IrregularSpending),
        _ => None,
    }
}

fn food_penalty(window: &[&Transaction], expense: f64) -> Option<Penalty> {
    if expense <= 0.0 {
        return None;
    }
    let food: f64 = window
        .iter()
        .filter(|t| t.is_expense() && t.category() == Category::Food)
        .map(|t| t.abs_amount())
        .sum();
    (food / expense > FOOD_SHARE_LIMIT).then_some(Penalty::FoodConcentration)
}

/// Score the 30 days ending at `now`.
///
/// Returns `(0, insufficient data)` when no transaction falls in the window.
pub fn score(transactions: &[Transaction], now: NaiveDate) -> HealthScore {
    let window: Vec<&Transaction> = in_window(transactions, now, SCORE_WINDOW_DAYS).collect();

    if window.is_empty() {
        return HealthScore::insufficient();
    }

    let income: f64 = window.iter().filter(|t| t.is_income()).map(|t| t.amount()).sum();
    let expense: f64 = window.iter().filter(|t| t.is_expense()).map(|t| t.abs_amount()).sum();

    let penalties: Vec<Penalty> = [
        ratio_penalty(income, expense),
        variability_penalty(&window),
        food_penalty(&window, expense),
    ]
    .into_iter()
    .flatten()
    .collect();

    let raw = penalties.iter().fold(BASE_SCORE, |acc, p| acc - p.points());
    let score = raw.clamp(0, 100) as u8;

    tracing::debug!(income, expense, ?penalties, score, "health score computed");

    HealthScore {
        score,
        label: HealthLabel::from_score(score),
        penalties,
    }
}
