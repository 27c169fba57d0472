pub mod nubank;

pub use nubank::{parse_nubank_csv, ColumnMap, ColumnRole, NubankParser};
