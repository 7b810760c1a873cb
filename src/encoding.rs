//! Character encoding detection and transcoding.
//!
//! Pages arrive as bytes in whatever charset the server felt like. The byte
//! entry points sniff the declared charset from the document head and decode
//! to UTF-8 before parsing, replacing invalid sequences with U+FFFD.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Only the document head can declare a charset; cap the sniff window.
const SNIFF_WINDOW: usize = 1024;

/// Matches both `<meta charset=...>` and the legacy
/// `<meta http-equiv="Content-Type" content="...; charset=...">` forms.
static CHARSET_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?([a-zA-Z0-9_\-]+)"#).expect("CHARSET_DECL regex")
});

/// Resolve the encoding declared in the first kilobyte of the document.
///
/// Falls back to UTF-8 when nothing is declared or the label is unknown.
/// Note that `encoding_rs` maps ISO-8859-1 to windows-1252 per the WHATWG
/// encoding standard.
#[must_use]
pub fn sniff_charset(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_WINDOW)]);

    CHARSET_DECL
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string using the declared charset.
///
/// Never fails: undecodable sequences become U+FFFD.
#[must_use]
pub fn decode(html: &[u8]) -> String {
    let encoding = sniff_charset(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
