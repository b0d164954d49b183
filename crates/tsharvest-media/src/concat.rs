//! Concat list parsing.
//!
//! A concat list names one segment per line as `file <name>`, the format the
//! ffmpeg concat demuxer reads and the one [`crate::Assembler`] renders.

use crate::{Error, Result};

/// Parse a concat list into segment file names, in order.
///
/// Blank lines and `#` comments are skipped. Names may be wrapped in single
/// quotes.
///
/// # Errors
///
/// Returns [`Error::MalformedConcatLine`] for any other line.
pub fn parse_concat_list(text: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let name = trimmed
            .strip_prefix("file")
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .map(str::trim)
            .map(unquote)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::MalformedConcatLine {
                line_number: index + 1,
                line: line.to_string(),
            })?;

        names.push(name.to_string());
    }

    Ok(names)
}

fn unquote(name: &str) -> &str {
    name.strip_prefix('\'')
        .and_then(|n| n.strip_suffix('\''))
        .unwrap_or(name)
}
