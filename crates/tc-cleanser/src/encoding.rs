//! Byte-to-text decoding for legacy 8-bit CSV sources.

pub use encoding_rs::Encoding;
use tc_core::LexiconLoadError;

const BOM: char = '\u{FEFF}';

/// Resolve a WHATWG label (`latin1`, `windows-1252`, `utf-8`, ...).
///
/// `latin1` and `iso-8859-1` resolve to windows-1252, which maps every
/// byte to a character. Only ASCII-compatible encodings are accepted since
/// the CSV tokenizer works on raw bytes.
pub fn resolve(label: &str) -> Result<&'static Encoding, LexiconLoadError> {
    match Encoding::for_label(label.trim().as_bytes()) {
        Some(enc) if enc.is_ascii_compatible() => Ok(enc),
        _ => Err(LexiconLoadError::UnknownEncoding(label.to_string())),
    }
}

/// Decode one field. `None` when the bytes are not valid in `encoding`.
pub fn decode_field(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|cow| cow.into_owned())
}

/// Decode a header cell, dropping a leading byte-order mark.
pub fn decode_header(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    decode_field(bytes, encoding).map(|s| s.trim_start_matches(BOM).to_string())
}
