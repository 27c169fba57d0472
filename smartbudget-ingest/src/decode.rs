//! Byte-to-text decoding for statement exports.
//!
//! Exports arrive as UTF-8 or as a Windows/ISO-8859-1 single-byte encoding.

use crate::types::SourceEncoding;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode statement bytes, trying UTF-8 first and falling back to Latin-1.
///
/// Latin-1 maps every byte to a char, so decoding never fails.
pub fn decode(bytes: &[u8]) -> (String, SourceEncoding) {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(s) => (s.to_string(), SourceEncoding::Utf8),
        Err(_) => (
            bytes.iter().map(|&b| b as char).collect(),
            SourceEncoding::Latin1,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_with_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("Descrição".as_bytes());
        let (text, enc) = decode(&bytes);
        assert_eq!(text, "Descrição");
        assert_eq!(enc, SourceEncoding::Utf8);
    }

    #[test]
    fn test_latin1_fallback() {
        // "Descrição" in ISO-8859-1
        let bytes = b"Descri\xe7\xe3o";
        let (text, enc) = decode(bytes);
        assert_eq!(text, "Descrição");
        assert_eq!(enc, SourceEncoding::Latin1);
    }
}
