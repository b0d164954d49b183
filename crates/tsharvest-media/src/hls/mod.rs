//! HLS manifest handling.
//!
//! This module parses flat media playlists into segment references and
//! merges successive snapshots of the same playlist.

mod playlist;
mod reconcile;

pub use playlist::{parse_manifest, parse_manifests, ManifestSegmentList, SegmentRef, METADATA_TAG};
pub use reconcile::reconcile;
