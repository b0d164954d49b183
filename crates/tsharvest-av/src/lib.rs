//! # tsharvest-av
//!
//! Hands assembled transport streams to external media tools.
//!
//! This crate provides functionality for:
//! - Locating ffmpeg (configured path or `PATH` lookup)
//! - Remuxing a concatenated `.ts` stream into a container with stream copy
//! - Cutting a time range out of a media file
//!
//! Every action writes into a [`Workspace`] next to its destination and moves
//! the result into place only once the tool has succeeded.
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use tsharvest_av::{actions, tools};
//!
//! let ffmpeg = tools::ffmpeg_path(None)?;
//! actions::remux_stream(&ffmpeg, "o.ts".as_ref(), "movie.mp4".as_ref())?;
//! # Ok::<(), tsharvest_av::Error>(())
//! ```

pub mod actions;
mod error;
pub mod tools;
pub mod workspace;

// Re-exports
pub use actions::{clip, remux_stream, Container};
pub use error::{Error, Result};
pub use tools::{check_tools, probe_tool, require_tool, ToolInfo};
pub use workspace::Workspace;
