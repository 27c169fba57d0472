//! Demo statement generator: six months of plausible card spending plus
//! a recurring salary, for trying the dashboard without a real export.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::StatementRow;

/// Days of history covered by the generated statement
pub const SAMPLE_SPAN_DAYS: i64 = 180;
pub const SAMPLE_EXPENSES: usize = 300;
pub const SAMPLE_SALARIES: usize = 12;
pub const SALARY_AMOUNT: f64 = 3500.00;
pub const SALARY_DESCRIPTION: &str = "SALARIO EMPRESA";

struct SpendingGroup {
    keywords: &'static [&'static str],
    /// Expense magnitude range, low inclusive, high exclusive
    range: (f64, f64),
}

const GROUPS: &[SpendingGroup] = &[
    SpendingGroup {
        keywords: &["IFOOD", "UBER EATS", "RESTAURANTE", "SUPERMERCADO", "PADARIA"],
        range: (15.0, 150.0),
    },
    SpendingGroup {
        keywords: &["UBER", "99", "POSTO", "ESTACIONAMENTO"],
        range: (8.0, 80.0),
    },
    SpendingGroup {
        keywords: &["NETFLIX", "SPOTIFY", "CINEMA", "SHOPPING"],
        range: (10.0, 200.0),
    },
    SpendingGroup {
        keywords: &["FARMACIA", "CONSULTA", "PLANO SAUDE"],
        range: (20.0, 300.0),
    },
    SpendingGroup {
        keywords: &["MERCADO", "LIMPEZA", "CONTA LUZ", "CONTA AGUA"],
        range: (30.0, 400.0),
    },
    SpendingGroup {
        keywords: &["CURSO", "LIVRO", "ESCOLA"],
        range: (25.0, 250.0),
    },
];

/// Options for [`generate_sample`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    /// Fixed seed for a reproducible statement; `None` draws from entropy
    pub seed: Option<u64>,
    pub expenses: usize,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            seed: None,
            expenses: SAMPLE_EXPENSES,
        }
    }
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Generate a demo statement ending at `now`.
///
/// Expenses come first in random date order, followed by the salary credits
/// paid every 15 days from the start of the span.
pub fn generate_sample(now: NaiveDate, opts: SampleOptions) -> Vec<StatementRow> {
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let base = now - Duration::days(SAMPLE_SPAN_DAYS);

    let mut rows = Vec::with_capacity(opts.expenses + SAMPLE_SALARIES);

    for _ in 0..opts.expenses {
        let date = base + Duration::days(rng.gen_range(0..SAMPLE_SPAN_DAYS));
        let group = &GROUPS[rng.gen_range(0..GROUPS.len())];
        let keyword = group.keywords[rng.gen_range(0..group.keywords.len())];
        let (lo, hi) = group.range;

        rows.push(StatementRow {
            date,
            amount: -round_cents(rng.gen_range(lo..hi)),
            description: format!("{} *{}", keyword, rng.gen_range(1000..10000)),
        });
    }

    for i in 0..SAMPLE_SALARIES {
        rows.push(StatementRow {
            date: base + Duration::days(i as i64 * 15),
            amount: SALARY_AMOUNT,
            description: SALARY_DESCRIPTION.to_string(),
        });
    }

    rows
}
