//! Opaque pagination cursors.
//!
//! A cursor is standard (padded) base64 over a comma-separated list of
//! `key:value` segments, e.g. `offset:10,limit:5`.

use super::params::Pagination;
use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub type CursorPair = (String, String);

pub fn encode_cursor(pairs: &[CursorPair]) -> String {
    let raw = pairs
        .iter()
        .map(|(k, v)| format!("{k}:{v}"))
        .collect::<Vec<_>>()
        .join(",");
    STANDARD.encode(raw)
}

pub fn decode_cursor(cursor: &str) -> Result<Vec<CursorPair>> {
    let bytes = STANDARD
        .decode(cursor)
        .map_err(|e| Error::InvalidEncoding(e.to_string()))?;
    let raw = String::from_utf8(bytes).map_err(|e| Error::InvalidEncoding(e.to_string()))?;

    if raw.is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(|segment| {
            let parts: Vec<&str> = segment.split(':').collect();
            match parts.as_slice() {
                [key, value] => Ok((key.to_string(), value.to_string())),
                _ => Err(Error::MalformedCursor(format!(
                    "expected key:value, got {segment:?}"
                ))),
            }
        })
        .collect()
}

/// Cursor for the page after `page`, or "" when `result_count` shows there is none.
pub fn next_cursor(result_count: usize, page: &Pagination) -> String {
    if result_count as i64 > page.limit {
        encode_cursor(&[("offset".to_string(), (page.offset + page.limit).to_string())])
    } else {
        String::new()
    }
}
