//! Read-only views over a transaction table for the dashboard charts.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use smartbudget_core::{Category, LinearFit, Transaction, YearMonth};
use std::collections::{BTreeMap, HashMap};

/// Weekdays in chart order
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthlyBalance {
    pub month: YearMonth,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeekdayTotal {
    pub weekday: Weekday,
    pub total: f64,
}

/// Income and spending for one calendar month
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthMetrics {
    pub month: YearMonth,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub transactions: usize,
}

/// Expense magnitude per category, largest first.
///
/// Categories without expenses are left out; ties keep rule order.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut sums: HashMap<Category, f64> = HashMap::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        *sums.entry(t.category()).or_insert(0.0) += t.abs_amount();
    }

    let mut totals: Vec<CategoryTotal> = Category::ALL
        .iter()
        .filter_map(|c| sums.get(c).map(|total| CategoryTotal { category: *c, total: *total }))
        .collect();
    // stable sort keeps rule order among equal totals
    totals.sort_by(|a, b| b.total.total_cmp(&a.total));
    totals
}

/// Income minus expenses per calendar month, oldest first
pub fn monthly_balances(transactions: &[Transaction]) -> Vec<MonthlyBalance> {
    let mut months: BTreeMap<YearMonth, f64> = BTreeMap::new();
    for t in transactions {
        *months.entry(YearMonth::of(t.date())).or_insert(0.0) += t.amount();
    }
    months
        .into_iter()
        .map(|(month, balance)| MonthlyBalance { month, balance })
        .collect()
}

/// Expense magnitude per calendar month, oldest first. Months with no
/// expenses are absent.
pub fn monthly_expenses<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<(YearMonth, f64)> {
    let mut months: BTreeMap<YearMonth, f64> = BTreeMap::new();
    for t in transactions.into_iter().filter(|t| t.is_expense()) {
        *months.entry(YearMonth::of(t.date())).or_insert(0.0) += t.abs_amount();
    }
    months.into_iter().collect()
}

/// Least-squares trend over the monthly balances, empty below two months
pub fn balance_trend(balances: &[MonthlyBalance]) -> Vec<f64> {
    let values: Vec<f64> = balances.iter().map(|b| b.balance).collect();
    LinearFit::fit(&values)
        .map(|fit| fit.points(values.len()))
        .unwrap_or_default()
}

/// Expense magnitude per weekday, Monday first, zero-filled
pub fn weekday_totals(transactions: &[Transaction]) -> Vec<WeekdayTotal> {
    let mut sums = [0.0f64; 7];
    for t in transactions.iter().filter(|t| t.is_expense()) {
        sums[t.date().weekday().num_days_from_monday() as usize] += t.abs_amount();
    }
    WEEK.iter()
        .zip(sums)
        .map(|(weekday, total)| WeekdayTotal { weekday: *weekday, total })
        .collect()
}

/// Totals for the calendar month containing `now`
pub fn month_metrics(transactions: &[Transaction], now: NaiveDate) -> MonthMetrics {
    let month = YearMonth::of(now);
    let in_month: Vec<&Transaction> = transactions.iter().filter(|t| month.contains(t.date())).collect();

    let income: f64 = in_month.iter().filter(|t| t.is_income()).map(|t| t.amount()).sum();
    let expenses: f64 = in_month.iter().filter(|t| t.is_expense()).map(|t| t.abs_amount()).sum();

    MonthMetrics {
        month,
        income,
        expenses,
        balance: income - expenses,
        transactions: in_month.len(),
    }
}
