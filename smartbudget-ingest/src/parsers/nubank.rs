//! Nubank-style statement CSV parser.
//!
//! Exports differ by product and language, so columns are found by header
//! name rather than position, e.g.:
//!   Data,Valor,Identificador,Descrição
//!   date,amount,description

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use regex::Regex;
use tracing::{debug, warn};

use crate::error::{ImportError, Result};
use crate::types::StatementRow;

/// Column a header can be mapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Date,
    Amount,
    Description,
}

impl ColumnRole {
    /// Mapping order: each role takes the first header that matches
    pub const ORDER: [ColumnRole; 3] = [ColumnRole::Date, ColumnRole::Amount, ColumnRole::Description];

    /// Header fragments recognized for this role (case-insensitive)
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            ColumnRole::Date => &["Data", "date", "Data da transação"],
            ColumnRole::Amount => &["Valor", "value", "Valor da transação", "amount"],
            ColumnRole::Description => &["Descrição", "description", "Estabelecimento", "merchant"],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColumnRole::Date => "date",
            ColumnRole::Amount => "amount",
            ColumnRole::Description => "description",
        }
    }

    fn matches(&self, header: &str) -> bool {
        let header = header.to_lowercase();
        self.candidates()
            .iter()
            .any(|c| header.contains(&c.to_lowercase()))
    }
}

/// Header positions for the three required columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub amount: usize,
    pub description: usize,
}

impl ColumnMap {
    /// Detect the required columns, or report which roles are missing
    pub fn detect(headers: &StringRecord) -> Result<Self> {
        let find = |role: ColumnRole| headers.iter().position(|h| role.matches(h));

        let found: Vec<(ColumnRole, Option<usize>)> =
            ColumnRole::ORDER.iter().map(|r| (*r, find(*r))).collect();

        match found.as_slice() {
            [(_, Some(date)), (_, Some(amount)), (_, Some(description))] => Ok(Self {
                date: *date,
                amount: *amount,
                description: *description,
            }),
            _ => {
                let missing: Vec<&str> = found
                    .iter()
                    .filter(|(_, idx)| idx.is_none())
                    .map(|(role, _)| role.name())
                    .collect();
                Err(ImportError::UnrecognizedFormat(missing.join(", ")))
            }
        }
    }
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a statement date, discarding any time of day
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Coerces raw CSV cells into typed statement rows
pub struct NubankParser {
    amount_re: Regex,
}

impl NubankParser {
    pub fn new() -> Result<Self> {
        // Optional sign, optional "R$", plain decimal with '.' separator
        let amount_re = Regex::new(r"^(?P<sign>[+-])?\s*(?:R\$)?\s*(?P<num>\d+(?:\.\d+)?|\.\d+)$")?;
        Ok(Self { amount_re })
    }

    pub fn parse_amount(&self, s: &str) -> Option<f64> {
        let caps = self.amount_re.captures(s.trim())?;
        let value: f64 = caps["num"].parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        match caps.name("sign").map(|m| m.as_str()) {
            Some("-") => Some(-value),
            _ => Some(value),
        }
    }

    fn parse_row(&self, record: &StringRecord, cols: ColumnMap) -> Option<StatementRow> {
        let date = parse_date(record.get(cols.date)?)?;
        let amount = self.parse_amount(record.get(cols.amount)?)?;
        let description = record.get(cols.description)?.trim();
        if description.is_empty() {
            return None;
        }
        Some(StatementRow {
            date,
            amount,
            description: description.to_string(),
        })
    }

    /// Parse decoded CSV text. Returns the kept rows and the number dropped.
    pub fn parse(&self, text: &str) -> Result<(Vec<StatementRow>, usize)> {
        if text.trim().is_empty() {
            return Err(ImportError::Empty);
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(text.as_bytes());

        let headers = rdr.headers()?.clone();
        let cols = ColumnMap::detect(&headers)?;
        debug!(?cols, "statement columns detected");

        let mut rows = Vec::new();
        let mut dropped = 0usize;

        for (line, result) in rdr.records().enumerate() {
            let record = result?;
            match self.parse_row(&record, cols) {
                Some(row) => rows.push(row),
                None => {
                    dropped += 1;
                    // header is line 1
                    warn!(line = line + 2, "dropping malformed statement row");
                }
            }
        }

        Ok((rows, dropped))
    }
}

/// Parse Nubank-style CSV text into statement rows
pub fn parse_nubank_csv(text: &str) -> Result<(Vec<StatementRow>, usize)> {
    NubankParser::new()?.parse(text)
}
