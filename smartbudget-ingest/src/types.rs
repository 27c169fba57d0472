use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized statement row handed to the analysis layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    pub date: NaiveDate,
    /// Positive = income, negative = expense.
    pub amount: f64,
    pub description: String,
}

impl StatementRow {
    pub fn into_parts(self) -> (NaiveDate, f64, String) {
        (self.date, self.amount, self.description)
    }
}

/// Text encoding a statement was decoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceEncoding {
    Utf8,
    Latin1,
}

/// Result of normalizing one statement file
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub rows: Vec<StatementRow>,
    /// Rows dropped because a date, amount or description failed to coerce
    pub dropped: usize,
    pub encoding: SourceEncoding,
}
