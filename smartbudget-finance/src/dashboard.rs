//! Dashboard snapshot: every derived view the presentation layer shows,
//! recomputed from scratch for a table and a reference date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smartbudget_core::TransactionTable;

use crate::aggregates::{
    balance_trend, category_totals, month_metrics, monthly_balances, weekday_totals,
    CategoryTotal, MonthMetrics, MonthlyBalance, WeekdayTotal,
};
use crate::forecast::predict_next_month;
use crate::score::{score, HealthScore};

/// Number of categories listed as biggest spenders
pub const TOP_CATEGORIES: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dashboard {
    pub as_of: NaiveDate,
    pub transactions: usize,
    pub health: HealthScore,
    pub forecast: f64,
    pub month: MonthMetrics,
    pub category_totals: Vec<CategoryTotal>,
    pub monthly_balances: Vec<MonthlyBalance>,
    /// Least-squares line over `monthly_balances`, empty below two months
    pub balance_trend: Vec<f64>,
    pub weekday_totals: Vec<WeekdayTotal>,
}

impl Dashboard {
    pub fn build(table: &TransactionTable, now: NaiveDate) -> Self {
        let txns = table.as_slice();
        let monthly_balances = monthly_balances(txns);

        Self {
            as_of: now,
            transactions: txns.len(),
            health: score(txns, now),
            forecast: predict_next_month(txns, now),
            month: month_metrics(txns, now),
            category_totals: category_totals(txns),
            balance_trend: balance_trend(&monthly_balances),
            monthly_balances,
            weekday_totals: weekday_totals(txns),
        }
    }

    /// Biggest spending categories, largest first
    pub fn top_categories(&self) -> &[CategoryTotal] {
        let n = self.category_totals.len().min(TOP_CATEGORIES);
        &self.category_totals[..n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::HealthLabel;
    use smartbudget_core::Category;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, day).unwrap()
    }

    #[test]
    fn test_empty_table_degrades() {
        let dash = Dashboard::build(&TransactionTable::new(), d(3, 31));
        assert_eq!(dash.health.score, 0);
        assert_eq!(dash.health.label, HealthLabel::InsufficientData);
        assert_eq!(dash.forecast, 0.0);
        assert!(dash.category_totals.is_empty());
        assert!(dash.top_categories().is_empty());
        assert_eq!(dash.weekday_totals.len(), 7);
        assert_eq!(dash.month.transactions, 0);
    }

    #[test]
    fn test_build_and_serialize() {
        let table = TransactionTable::from_rows(vec![
            (d(2, 10), -100.0, "IFOOD *1"),
            (d(3, 10), -200.0, "POSTO"),
            (d(3, 11), -20.0, "LIVRO"),
            (d(3, 12), -10.0, "CINEMA"),
            (d(3, 15), 3500.0, "SALARIO EMPRESA"),
        ]);
        let dash = Dashboard::build(&table, d(3, 31));

        assert_eq!(dash.transactions, 5);
        assert_eq!(dash.month.expenses, 230.0);
        assert_eq!(dash.monthly_balances.len(), 2);
        assert_eq!(dash.balance_trend.len(), 2);

        let top: Vec<Category> = dash.top_categories().iter().map(|c| c.category).collect();
        assert_eq!(top, vec![Category::Transport, Category::Food, Category::Education]);

        let json = serde_json::to_value(&dash).unwrap();
        assert_eq!(json["health"]["label"], "excellent");
        assert_eq!(json["category_totals"][0]["category"], "transport");
        assert_eq!(json["monthly_balances"][0]["month"]["month"], 2);
    }
}
