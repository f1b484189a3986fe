//! Byte stream decoding.
//!
//! The assignment pipeline accepts UTF-8 and falls back to windows-1251
//! (spreadsheets exported on Cyrillic-locale desktops). The
//! fixed-operations pipeline accepts UTF-8 only.

use encoding_rs::WINDOWS_1251;
use std::borrow::Cow;
use tracing::warn;

use crate::error::{AssignError, Result};

const BOM: char = '\u{feff}';

fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Decodes strict UTF-8. A leading byte-order mark is dropped.
pub fn decode_utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes)
        .map(strip_bom)
        .map_err(|_| AssignError::Decode { encoding: "UTF-8" })
}

/// Decodes UTF-8, retrying as windows-1251 on failure.
pub fn decode_with_fallback(bytes: &[u8]) -> Result<Cow<'_, str>> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(Cow::Borrowed(strip_bom(text))),
        Err(err) => {
            warn!(
                valid_up_to = err.valid_up_to(),
                "input is not UTF-8, decoding as windows-1251"
            );
            WINDOWS_1251
                .decode_without_bom_handling_and_without_replacement(bytes)
                .ok_or(AssignError::Decode {
                    encoding: "windows-1251",
                })
        }
    }
}
