//! File-name extraction from URLs and manifest reference lines.
//!
//! Segments and manifests are keyed by the trailing path component of the URL
//! they were fetched from. A query string or fragment is ignored, so
//! `https://cdn/live/seg_00012.ts?token=abc` keys as `seg_00012.ts`. When the
//! path itself carries no such name, a name trailing the query is used, so
//! `https://cdn/play.php?file=/vod/seg1.ts` keys as `seg1.ts`.

use crate::{MANIFEST_EXTENSION, SEGMENT_EXTENSION};

/// Extract the last path component of `text` if it ends in `.{extension}`.
///
/// Returns `None` when there is no such component, including when the stem
/// before the extension is empty.
///
/// # Example
///
/// ```
/// use tsharvest_common::names::file_name_with_extension;
///
/// assert_eq!(
///     file_name_with_extension("https://cdn/a/b/index.m3u8", "m3u8"),
///     Some("index.m3u8")
/// );
/// assert_eq!(file_name_with_extension("https://cdn/a/b/", "ts"), None);
/// ```
pub fn file_name_with_extension<'a>(text: &'a str, extension: &str) -> Option<&'a str> {
    let text = text.trim();
    let path = cut_at(text, &['?', '#']);

    path.rsplit('/')
        .next()
        .and_then(|name| with_extension(name, extension))
        .or_else(|| {
            // Name carried in the query, e.g. `play.php?file=/vod/seg1.ts&sig=x`.
            let tail = text.rsplit('/').next()?;
            with_extension(cut_at(tail, &['?', '&', '#']), extension)
        })
}

fn cut_at<'a>(text: &'a str, delimiters: &[char]) -> &'a str {
    let end = text.find(delimiters).unwrap_or(text.len());
    &text[..end]
}

fn with_extension<'a>(name: &'a str, extension: &str) -> Option<&'a str> {
    let stem = name.strip_suffix(extension)?.strip_suffix('.')?;

    if stem.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Extract a segment file name (`<name>.ts`) from a URL or manifest line.
pub fn segment_file_name(text: &str) -> Option<&str> {
    file_name_with_extension(text, SEGMENT_EXTENSION)
}

/// Extract a manifest file name (`<name>.m3u8`) from a URL.
pub fn manifest_file_name(text: &str) -> Option<&str> {
    file_name_with_extension(text, MANIFEST_EXTENSION)
}

/// Insert a `_N` position marker before the extension of `name`.
///
/// Names without an extension get the marker appended.
pub fn with_position_suffix(name: &str, position: usize) -> String {
    match name.rfind('.') {
        Some(dot) if dot > 0 => format!("{}_{}{}", &name[..dot], position, &name[dot..]),
        _ => format!("{}_{}", name, position),
    }
}
