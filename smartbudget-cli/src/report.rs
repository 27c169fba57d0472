//! Plain-text rendering of a dashboard snapshot for `smartbudget report`.

use chrono::Weekday;
use smartbudget_finance::{DataSource, Dashboard};
use std::fmt::Write;

use crate::fmt::money;

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn source_label(source: &DataSource) -> String {
    match source {
        DataSource::Empty => "no data".to_string(),
        DataSource::Sample => "sample data".to_string(),
        DataSource::File(p) => p.display().to_string(),
    }
}

pub fn render_text(dash: &Dashboard, source: &DataSource, symbol: &str) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write_report(&mut out, dash, source, symbol);
    out
}

fn write_report(
    out: &mut String,
    dash: &Dashboard,
    source: &DataSource,
    symbol: &str,
) -> std::fmt::Result {
    writeln!(out, "# SmartBudget report (as of {})\n", dash.as_of)?;
    writeln!(out, "Source: {} ({} transactions)\n", source_label(source), dash.transactions)?;

    writeln!(out, "## Financial health\n")?;
    writeln!(out, "Score: {}/100 ({})", dash.health.score, dash.health.label)?;
    for p in &dash.health.penalties {
        writeln!(out, "- {} (-{})", p.description(), p.points())?;
    }

    let m = &dash.month;
    writeln!(out, "\n## Month {}\n", m.month)?;
    writeln!(out, "Income:       {}", money(symbol, m.income))?;
    writeln!(out, "Expenses:     {}", money(symbol, m.expenses))?;
    writeln!(out, "Balance:      {}", money(symbol, m.balance))?;
    writeln!(out, "Transactions: {}", m.transactions)?;

    writeln!(out, "\n## Forecast\n")?;
    writeln!(out, "Next month: {}", money(symbol, dash.forecast))?;

    let top = dash.top_categories();
    if !top.is_empty() {
        writeln!(out, "\nBiggest spending:")?;
        for (i, c) in top.iter().enumerate() {
            writeln!(out, "{}. {}: {}", i + 1, c.category, money(symbol, c.total))?;
        }
    }

    if !dash.monthly_balances.is_empty() {
        writeln!(out, "\n## Monthly balance\n")?;
        for (i, b) in dash.monthly_balances.iter().enumerate() {
            match dash.balance_trend.get(i) {
                Some(trend) => writeln!(
                    out,
                    "{}  {:>16}  trend {}",
                    b.month,
                    money(symbol, b.balance),
                    money(symbol, *trend)
                )?,
                None => writeln!(out, "{}  {:>16}", b.month, money(symbol, b.balance))?,
            }
        }
    }

    if !dash.category_totals.is_empty() {
        writeln!(out, "\n## Spending by category\n")?;
        let total: f64 = dash.category_totals.iter().map(|c| c.total).sum();
        for c in &dash.category_totals {
            let pct = if total > 0.0 { c.total / total * 100.0 } else { 0.0 };
            writeln!(
                out,
                "{:<14} {:>16}  {:>5.1}%",
                c.category.label(),
                money(symbol, c.total),
                pct
            )?;
        }
    }

    writeln!(out, "\n## Spending by weekday\n")?;
    for w in &dash.weekday_totals {
        writeln!(out, "{:<10} {:>16}", weekday_name(w.weekday), money(symbol, w.total))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use smartbudget_core::TransactionTable;

    #[test]
    fn test_render_text_sections() {
        let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
        let table = TransactionTable::from_rows(vec![
            (d(3, 28), -50.0, "IFOOD *123"),
            (d(3, 29), -30.0, "UBER *456"),
            (d(3, 30), 3500.0, "SALARIO EMPRESA"),
        ]);
        let dash = Dashboard::build(&table, d(3, 31));
        let text = render_text(&dash, &DataSource::Sample, "R$");

        assert!(text.contains("Source: sample data (3 transactions)"));
        assert!(text.contains("Score: 90/100 (excellent)"));
        assert!(text.contains("- food above 40% of spending (-10)"));
        assert!(text.contains("Income:       R$ 3,500.00"));
        assert!(text.contains("Next month: R$ 80.00"));
        assert!(text.contains("1. Food: R$ 50.00"));
        assert!(text.contains("Saturday"));
    }

    #[test]
    fn test_empty_dashboard_text() {
        let dash = Dashboard::build(&TransactionTable::new(), NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
        let text = render_text(&dash, &DataSource::Empty, "R$");
        assert!(text.contains("Score: 0/100 (insufficient data)"));
        assert!(!text.contains("Biggest spending"));
    }
}
