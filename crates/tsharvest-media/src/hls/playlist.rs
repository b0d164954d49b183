//! Media playlist parsing.

use crate::{Error, Result};
use std::hash::{Hash, Hasher};
use tsharvest_common::{segment_file_name, ManifestText};

/// Prefix of the per-segment metadata tag.
pub const METADATA_TAG: &str = "#EXTINF:";

/// A segment reference read from a manifest.
///
/// Two references are equal when they name the same file; the metadata line
/// travels with the reference but is not compared.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct SegmentRef {
    /// Segment file name (`<name>.ts`).
    pub name: String,
    /// The `#EXTINF:` line that preceded the reference.
    pub metadata: String,
}

impl SegmentRef {
    /// Create a new segment reference.
    pub fn new(name: impl Into<String>, metadata: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: metadata.into(),
        }
    }

    /// Segment duration in seconds, parsed from the metadata line.
    pub fn duration_secs(&self) -> Option<f64> {
        let value = self.metadata.strip_prefix(METADATA_TAG)?;
        let value = value.split(',').next()?.trim();
        value.parse().ok()
    }
}

impl PartialEq for SegmentRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for SegmentRef {}

impl Hash for SegmentRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Segment references of one manifest, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSegmentList {
    /// Name of the manifest the list was read from.
    pub manifest: String,
    /// References in the order they appear in the manifest.
    pub segments: Vec<SegmentRef>,
}

impl ManifestSegmentList {
    /// Create a list from already parsed references.
    pub fn new(manifest: impl Into<String>, segments: Vec<SegmentRef>) -> Self {
        Self {
            manifest: manifest.into(),
            segments,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment file names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.name.as_str())
    }
}

/// Parse one manifest into its ordered segment references.
///
/// Lines before the first `#EXTINF:` tag are header and skipped. After that,
/// each `#EXTINF:` line is held until the next reference line, which yields
/// one [`SegmentRef`]. A second tag before any reference replaces the first.
/// Blank lines and other `#` lines never count as references, and a
/// reference line with no pending tag is ignored.
///
/// # Errors
///
/// Returns [`Error::MalformedManifestLine`] if a reference line following a
/// tag has no `.ts` file name.
pub fn parse_manifest(manifest: &str, content: &str) -> Result<ManifestSegmentList> {
    let mut in_header = true;
    let mut pending: Option<&str> = None;
    let mut segments = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let is_metadata = line.starts_with(METADATA_TAG);

        if in_header {
            if !is_metadata {
                continue;
            }
            in_header = false;
        }

        if is_metadata {
            if let Some(stale) = pending.replace(line) {
                tracing::debug!("{}: dropping unused tag {:?}", manifest, stale);
            }
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(metadata) = pending.take() else {
            continue;
        };

        let name = segment_file_name(trimmed)
            .ok_or_else(|| Error::malformed_line(manifest, index + 1, line))?;

        segments.push(SegmentRef::new(name, metadata));
    }

    tracing::debug!("{}: {} segment references", manifest, segments.len());

    Ok(ManifestSegmentList::new(manifest, segments))
}

/// Parse every captured manifest, keeping capture order.
pub fn parse_manifests(manifests: &[ManifestText]) -> Result<Vec<ManifestSegmentList>> {
    manifests
        .iter()
        .map(|m| parse_manifest(&m.name, &m.content))
        .collect()
}
