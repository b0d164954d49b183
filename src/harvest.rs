//! Archive-to-playback-order pipeline.
//!
//! A [`Harvest`] holds everything derived from one archive: the captured
//! payloads, the parsed manifest snapshots and the reconciled segment order.
//! All fatal errors surface while building it, before anything is written.

use crate::config::ArchiveConfig;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tsharvest_archive::{ArchiveReader, Capture};
use tsharvest_media::{
    parse_manifests, reconcile, Assembler, ManifestSegmentList, MissingSegment, SegmentRef,
};

/// Payloads and reconciled order for one archive.
#[derive(Debug, Clone)]
pub struct Harvest {
    pub capture: Capture,
    pub snapshots: Vec<ManifestSegmentList>,
    pub order: Vec<SegmentRef>,
}

impl Harvest {
    /// Build a harvest from archive bytes.
    pub fn from_bytes(bytes: &[u8], config: &ArchiveConfig) -> Result<Self> {
        let reader = ArchiveReader::with_segment_mime_types(&config.segment_mime_types);
        let capture = reader.read(bytes)?;
        Self::from_capture(capture)
    }

    /// Read and build a harvest from an archive file.
    pub fn open(path: &Path, config: &ArchiveConfig) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read archive: {:?}", path))?;

        tracing::info!("Read {} bytes from {:?}", bytes.len(), path);

        Self::from_bytes(&bytes, config).with_context(|| format!("Failed to load archive: {:?}", path))
    }

    /// Parse and reconcile the manifests of an already read capture.
    pub fn from_capture(capture: Capture) -> Result<Self> {
        let snapshots = parse_manifests(&capture.manifests)?;
        let order = reconcile(&snapshots);

        Ok(Self {
            capture,
            snapshots,
            order,
        })
    }

    /// Assembler over the reconciled order and captured payloads.
    pub fn assembler(&self) -> Assembler<'_> {
        Assembler::new(&self.order, &self.capture.segments)
    }

    /// Overview of the harvest for display.
    pub fn summary(&self) -> Summary {
        Summary {
            har_version: self.capture.version.clone(),
            segments_captured: self.capture.segments.len(),
            manifests: self
                .snapshots
                .iter()
                .map(|s| ManifestSummary {
                    name: s.manifest.clone(),
                    segments: s.len(),
                })
                .collect(),
            reconciled: self.order.len(),
            duration_secs: self.order.iter().filter_map(|s| s.duration_secs()).sum(),
            missing: self.assembler().missing(),
        }
    }
}

/// Overview printed by `tsharvest inspect`.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub har_version: Option<String>,
    pub segments_captured: usize,
    pub manifests: Vec<ManifestSummary>,
    pub reconciled: usize,
    pub duration_secs: f64,
    pub missing: Vec<MissingSegment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestSummary {
    pub name: String,
    pub segments: usize,
}
