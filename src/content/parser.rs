//! Entry-file parsing
//!
//! An entry file carries the title and the body between `---` delimiter
//! lines:
//!
//! ```text
//! ---
//! A Quiet Morning
//! ---
//! Woke up before the alarm for once...
//! ```

use crate::error::{Error, Result};

/// Delimiter that separates the title from the body
const DELIMITER: &str = "---\n";

/// Split raw file content into a trimmed (title, body) pair.
///
/// The delimiter must occur at least twice: the segment after the first
/// delimiter is the title, the one after the second is the body. The
/// delimiter sequence cannot be escaped, so a body containing a `---`
/// line loses everything past it.
pub fn parse_entry(raw: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = raw.split(DELIMITER).collect();
    if parts.len() < 3 {
        return Err(Error::Format);
    }

    let title = parts[1].trim().to_string();
    let body = parts[2].trim().to_string();
    Ok((title, body))
}
