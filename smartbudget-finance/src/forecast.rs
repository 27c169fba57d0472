//! Next-month spending forecast.
//!
//! Naive one-step linear extrapolation over the monthly expense totals of
//! the last 90 days. A heuristic, not a fitted forecasting model.

use chrono::NaiveDate;
use smartbudget_core::{in_window, LinearFit, Transaction};

use crate::aggregates::monthly_expenses;

/// Lookback used by the forecast
pub const FORECAST_WINDOW_DAYS: i64 = 90;

/// Predict next month's total spending (a magnitude, never negative).
///
/// 0 when the window holds no expenses; the single month's total when only
/// one month is present; otherwise `|last + slope|` of a least-squares line.
pub fn predict_next_month(transactions: &[Transaction], now: NaiveDate) -> f64 {
    let totals: Vec<f64> = monthly_expenses(in_window(transactions, now, FORECAST_WINDOW_DAYS))
        .into_iter()
        .map(|(_, total)| total)
        .collect();

    let prediction = match (totals.last(), LinearFit::fit(&totals)) {
        (None, _) => 0.0,
        (Some(last), None) => *last,
        (Some(last), Some(fit)) => (last + fit.slope).abs(),
    };

    tracing::debug!(months = totals.len(), prediction, "next-month forecast");
    prediction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, day).unwrap()
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(predict_next_month(&[], d(3, 31)), 0.0);
    }

    #[test]
    fn test_income_only_is_zero() {
        let txns = vec![Transaction::new(d(3, 5), 3500.0, "SALARIO")];
        assert_eq!(predict_next_month(&txns, d(3, 31)), 0.0);
    }

    #[test]
    fn test_single_month_is_exact() {
        let txns = vec![
            Transaction::new(d(3, 2), -120.25, "IFOOD"),
            Transaction::new(d(3, 9), -79.75, "POSTO"),
            Transaction::new(d(3, 10), 3500.0, "SALARIO"),
        ];
        assert_eq!(predict_next_month(&txns, d(3, 31)), 200.0);
    }

    #[test]
    fn test_two_months_trend() {
        let txns = vec![
            Transaction::new(d(2, 10), -100.0, "IFOOD"),
            Transaction::new(d(3, 10), -150.0, "IFOOD"),
            Transaction::new(d(3, 11), -50.0, "UBER"),
        ];
        assert_eq!(predict_next_month(&txns, d(3, 31)), 300.0);
    }

    #[test]
    fn test_three_month_fit() {
        // totals [300, 500, 400]: slope 50
        let txns = vec![
            Transaction::new(d(1, 15), -300.0, "CONTA LUZ"),
            Transaction::new(d(2, 15), -500.0, "CONTA LUZ"),
            Transaction::new(d(3, 15), -400.0, "CONTA LUZ"),
        ];
        let p = predict_next_month(&txns, d(3, 31));
        assert!((p - 450.0).abs() < 1e-9, "{p}");
    }

    #[test]
    fn test_falling_trend_reports_magnitude() {
        // totals [1000, 100]: 100 - 900 = -800, reported as 800
        let txns = vec![
            Transaction::new(d(2, 20), -1000.0, "CONDOMINIO"),
            Transaction::new(d(3, 20), -100.0, "CONDOMINIO"),
        ];
        assert_eq!(predict_next_month(&txns, d(3, 31)), 800.0);
    }

    #[test]
    fn test_window_excludes_old_months() {
        let txns = vec![
            Transaction::new(NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(), -5000.0, "CONDOMINIO"),
            Transaction::new(d(3, 20), -100.0, "CONDOMINIO"),
        ];
        // the window opens on Dec 31
        assert_eq!(predict_next_month(&txns, d(3, 31)), 100.0);
    }
}
