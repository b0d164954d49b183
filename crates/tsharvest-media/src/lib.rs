//! Tsharvest-Media: manifest parsing, reconciliation and stream assembly
//!
//! This crate turns the manifests and segments pulled out of a capture
//! archive into one playable segment order.
//!
//! # Modules
//!
//! - `hls` - Manifest parsing and snapshot reconciliation
//! - `assemble` - Byte stream, rebuilt manifest and concat list output
//! - `concat` - Reading concat lists back
//!
//! # Architecture
//!
//! A live HLS player refetches its manifest every few seconds, so a capture
//! holds a series of overlapping snapshots of one sliding window:
//!
//! 1. Each snapshot is parsed into an ordered list of segment references
//! 2. Each list is filtered against the snapshot captured just before it
//! 3. The surviving references are joined with the captured segment bodies
//!
//! References without a captured body are reported, never fatal.

pub mod assemble;
pub mod concat;
pub mod error;
pub mod hls;

pub use assemble::{
    manifest_files, segment_files, should_continue, AssemblyReport, Assembler, ContinueGate,
    MissingPolicy, MissingSegment, Rendered,
};
pub use concat::parse_concat_list;
pub use error::{Error, Result};
pub use hls::{parse_manifest, parse_manifests, reconcile, ManifestSegmentList, SegmentRef};
