//! smartbudget-ingest: statement decoding, column mapping and demo data.

pub mod decode;
pub mod error;
pub mod parsers;
pub mod sample;
pub mod types;

use std::path::Path;

use tracing::debug;

pub use error::{ImportError, Result};
pub use sample::{generate_sample, SampleOptions};
pub use types::{ImportOutcome, SourceEncoding, StatementRow};

/// Normalize raw statement bytes into typed rows
pub fn import_bytes(bytes: &[u8]) -> Result<ImportOutcome> {
    let (text, encoding) = decode::decode(bytes);
    let (rows, dropped) = parsers::parse_nubank_csv(&text)?;
    debug!(rows = rows.len(), dropped, ?encoding, "statement normalized");
    Ok(ImportOutcome {
        rows,
        dropped,
        encoding,
    })
}

/// Read and normalize a statement CSV from disk
pub fn import_statement(path: impl AsRef<Path>) -> Result<ImportOutcome> {
    let bytes = std::fs::read(path.as_ref())?;
    import_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_import_latin1_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Data,Valor,Descri\xe7\xe3o\n2026-01-05,-20.00,FARMACIA\n")
            .unwrap();

        let outcome = import_statement(file.path()).unwrap();
        assert_eq!(outcome.encoding, SourceEncoding::Latin1);
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].description, "FARMACIA");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = import_statement("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, ImportError::Io(_)));
    }
}
