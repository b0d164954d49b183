//! Locating and probing ffmpeg.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Name of the ffmpeg executable.
pub const FFMPEG: &str = "ffmpeg";

/// Result of probing a tool executable.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: String,
    pub available: bool,
    /// Release reported by `-version`, e.g. `6.1.1`.
    pub version: Option<String>,
    pub path: Option<PathBuf>,
}

/// Probe `program` by running `program -version`.
///
/// `program` is either a bare name looked up on `PATH` or a path to an
/// executable.
///
/// # Example
///
/// ```no_run
/// use tsharvest_av::probe_tool;
///
/// let info = probe_tool("ffmpeg", "ffmpeg".as_ref());
/// if info.available {
///     println!("ffmpeg version: {:?}", info.version);
/// }
/// ```
pub fn probe_tool(name: &str, program: &Path) -> ToolInfo {
    match Command::new(program).arg("-version").output() {
        Ok(output) if output.status.success() => ToolInfo {
            name: name.to_string(),
            available: true,
            version: parse_version(&String::from_utf8_lossy(&output.stdout)),
            path: resolve(program),
        },
        _ => ToolInfo {
            name: name.to_string(),
            available: false,
            version: None,
            path: None,
        },
    }
}

/// `ffmpeg version 6.1.1-3ubuntu5 Copyright ...` reports `6.1.1-3ubuntu5`.
fn parse_version(banner: &str) -> Option<String> {
    let mut words = banner.lines().next()?.split_whitespace();
    words.find(|w| *w == "version")?;
    words.next().map(str::to_string)
}

fn resolve(program: &Path) -> Option<PathBuf> {
    if program.components().count() > 1 {
        Some(program.to_path_buf())
    } else {
        which::which(program).ok()
    }
}

/// Probe the tools tsharvest hands streams to.
///
/// `ffmpeg` may point at a configured executable instead of the `PATH` copy.
pub fn check_tools(ffmpeg: Option<&Path>) -> Vec<ToolInfo> {
    let program = ffmpeg.unwrap_or_else(|| Path::new(FFMPEG));
    vec![probe_tool(FFMPEG, program)]
}

/// Require that a tool is on `PATH`, returning its path.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Resolve the ffmpeg executable, preferring the configured path.
///
/// A configured path that does not exist is reported and `PATH` is searched
/// instead.
pub fn ffmpeg_path(configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = configured {
        if path.exists() {
            return Ok(path.to_path_buf());
        }

        #[cfg(feature = "tracing")]
        tracing::warn!("Configured ffmpeg path {:?} does not exist, searching PATH", path);
    }

    require_tool(FFMPEG)
}
