//! Session: owns the loaded transaction table and rebuilds views on demand.

use chrono::NaiveDate;
use smartbudget_core::TransactionTable;
use smartbudget_ingest::{
    generate_sample, import_statement, ImportError, SampleOptions, StatementRow,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::dashboard::Dashboard;

/// Where the current table came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    #[default]
    Empty,
    Sample,
    File(PathBuf),
}

/// Counts reported after a successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    table: TransactionTable,
    source: DataSource,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &TransactionTable {
        &self.table
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Replace the table with freshly categorized rows
    pub fn load_rows(&mut self, rows: Vec<StatementRow>, source: DataSource) -> usize {
        self.table = TransactionTable::from_rows(rows.into_iter().map(StatementRow::into_parts));
        self.source = source;
        debug!(rows = self.table.len(), source = ?self.source, "table replaced");
        self.table.len()
    }

    /// Import a statement file. On error the current table is kept.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, ImportError> {
        let path = path.as_ref();
        let outcome = import_statement(path)?;
        let loaded = self.load_rows(outcome.rows, DataSource::File(path.to_path_buf()));
        info!(path = %path.display(), loaded, dropped = outcome.dropped, "statement imported");
        Ok(LoadSummary {
            loaded,
            dropped: outcome.dropped,
        })
    }

    /// Replace the table with generated demo data ending at `now`
    pub fn load_sample(&mut self, now: NaiveDate, opts: SampleOptions) -> LoadSummary {
        let loaded = self.load_rows(generate_sample(now, opts), DataSource::Sample);
        LoadSummary { loaded, dropped: 0 }
    }

    pub fn dashboard(&self, now: NaiveDate) -> Dashboard {
        Dashboard::build(&self.table, now)
    }
}
