//! # tsharvest-archive
//!
//! Reads a browser network capture (HAR) and sorts its entries into the two
//! payload kinds the rest of tsharvest cares about:
//!
//! - transport-stream segments, keyed by file name
//! - HLS manifests, kept in capture order
//!
//! ## Example
//!
//! ```no_run
//! use tsharvest_archive::ArchiveReader;
//!
//! let bytes = std::fs::read("capture.har")?;
//! let capture = ArchiveReader::default().read(&bytes)?;
//! println!("{} segments, {} manifests", capture.segments.len(), capture.manifests.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
pub mod har;
pub mod reader;

pub use error::{Error, Result};
pub use har::{BodyEncoding, CaptureEntry};
pub use reader::{ArchiveReader, Capture, DEFAULT_SEGMENT_MIME_TYPE};
