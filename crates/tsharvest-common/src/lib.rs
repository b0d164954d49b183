//! Shared types and utilities for tsharvest.
//!
//! This crate provides the value types that flow between the archive reader
//! and the media crate, plus the file-name matcher both of them use to key
//! segments and manifests.

pub mod names;
pub mod types;

pub use names::{manifest_file_name, segment_file_name, with_position_suffix};
pub use types::{ManifestText, SegmentPayloads};

/// File extension of a transport-stream segment.
pub const SEGMENT_EXTENSION: &str = "ts";

/// File extension of an HLS manifest.
pub const MANIFEST_EXTENSION: &str = "m3u8";
