//! Character encoding detection and transcoding.
//!
//! Pages arrive as bytes in whatever charset the server or the markup
//! declares. Detection order: byte-order mark, `<meta charset>`, then
//! `<meta http-equiv="Content-Type">`, all within the first 1024 bytes.
//! Anything unrecognized decodes as UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes scanned for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// `charset=` inside a `<meta>` tag, either as its own attribute or inside
/// a `content` value.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9_:.\-]+)"#)
        .expect("META_CHARSET regex")
});

/// Charset label declared in the page head, if any.
#[must_use]
pub fn declared_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .map(|label| label.as_str().to_string())
}

/// Detect the encoding of an HTML byte stream.
///
/// A byte-order mark wins. Otherwise the first `<meta>` charset label that
/// `encoding_rs` recognizes is used, falling back to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    declared_charset(html)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes into a UTF-8 string.
///
/// Malformed sequences become U+FFFD instead of failing.
///
/// ```
/// use rs_readability::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let (text, _, _) = detect_encoding(html).decode(html);
    text.into_owned()
}
