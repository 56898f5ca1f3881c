//! Text handling: literal-string escaping, single-byte encoding and the page fonts.

mod encoding;
mod font;

pub use encoding::TextEncoding;
pub use font::{FontId, FontResource};

/// Escape `text` for use inside a PDF literal string `( ... )`.
///
/// Only backslash and the two parentheses are touched; each gets a single
/// backslash in front, so existing backslashes are never escaped twice.
pub fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '(' | ')') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Byte form of [`escape_literal`], for text that is already encoded.
///
/// The three delimiters are ASCII, and no single-byte encoding used here maps
/// any other character onto those byte values.
pub fn escape_literal_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut escaped = Vec::with_capacity(bytes.len());
    for &byte in bytes {
        if matches!(byte, b'\\' | b'(' | b')') {
            escaped.push(b'\\');
        }
        escaped.push(byte);
    }
    escaped
}
