//! Value types shared between the archive reader and the media crate.

use bytes::Bytes;
use std::collections::BTreeMap;

/// Captured segment bodies keyed by segment file name.
///
/// Built once by the archive reader and only looked up afterwards. A later
/// capture of the same name replaces an earlier one.
pub type SegmentPayloads = BTreeMap<String, Bytes>;

/// A manifest captured in the archive.
///
/// The archive reader yields these in capture order; a later manifest is a
/// refreshed view of the same stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestText {
    /// Manifest file name taken from the request URL.
    pub name: String,
    /// Decoded manifest text.
    pub content: String,
}

impl ManifestText {
    /// Create a new manifest record.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
