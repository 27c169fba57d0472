use chrono::NaiveDate;
use smartbudget_core::Category;
use smartbudget_finance::{DataSource, HealthLabel, Penalty, Session};
use smartbudget_ingest::SampleOptions;
use std::io::Write;

fn now() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()
}

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Portuguese account export: categorize, score and forecast end to end.
#[test]
fn test_dashboard_from_account_export() {
    let csv = write_csv(
        "Data,Valor,Identificador,Descrição\n\
10/02/2026,-100.00,id-1,SUPERMERCADO DIA\n\
12/02/2026,3500.00,id-2,SALARIO EMPRESA\n\
28/03/2026,-50.00,id-3,IFOOD *123\n\
29/03/2026,-30.00,id-4,UBER *456\n\
30/03/2026,3500.00,id-5,SALARIO EMPRESA\n\
31/03/2026,oops,id-6,CINEMA\n",
    );

    let mut session = Session::new();
    let summary = session.import_file(csv.path()).unwrap();
    assert_eq!(summary.loaded, 5);
    assert_eq!(summary.dropped, 1);
    assert_eq!(session.source(), &DataSource::File(csv.path().to_path_buf()));

    let cats: Vec<Category> = session.table().iter().map(|t| t.category()).collect();
    assert_eq!(
        cats,
        vec![Category::Food, Category::Income, Category::Food, Category::Transport, Category::Income]
    );

    let dash = session.dashboard(now());

    // last 30 days: income 3500, expense 80, Food 50 of 80
    assert_eq!(dash.health.penalties, vec![Penalty::FoodConcentration]);
    assert_eq!(dash.health.score, 90);
    assert_eq!(dash.health.label, HealthLabel::Excellent);

    // Feb 100, Mar 80: 80 + (80 - 100)
    assert!((dash.forecast - 60.0).abs() < 1e-9);

    assert_eq!(dash.month.income, 3500.0);
    assert_eq!(dash.month.expenses, 80.0);
    assert_eq!(dash.top_categories()[0].category, Category::Food);
    assert_eq!(dash.top_categories()[0].total, 150.0);
}

/// Seeded demo data keeps every view internally consistent.
#[test]
fn test_sample_dashboard_is_consistent() {
    let mut session = Session::new();
    session.load_sample(
        now(),
        SampleOptions {
            seed: Some(42),
            ..SampleOptions::default()
        },
    );
    let dash = session.dashboard(now());

    assert!(dash.health.score <= 100);
    assert!(dash.forecast >= 0.0);

    let total_expense: f64 = session
        .table()
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.abs_amount())
        .sum();
    let by_category: f64 = dash.category_totals.iter().map(|c| c.total).sum();
    let by_weekday: f64 = dash.weekday_totals.iter().map(|w| w.total).sum();
    assert!((total_expense - by_category).abs() < 1e-6);
    assert!((total_expense - by_weekday).abs() < 1e-6);

    // sample spans 180 days, so six or seven calendar months
    assert!((6..=7).contains(&dash.monthly_balances.len()));
    assert_eq!(dash.balance_trend.len(), dash.monthly_balances.len());
    assert!(!dash.category_totals.iter().any(|c| c.category == Category::Income));
}
