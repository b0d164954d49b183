//! Media processing actions.
//!
//! This module provides the operations tsharvest delegates to ffmpeg:
//! - Remuxing an assembled transport stream into a container
//! - Clipping a time range with stream copy

mod clip;
mod remux;

pub use clip::clip;
pub use remux::{remux_stream, Container};

use crate::{Error, Result};
use std::process::Command;

/// Run a prepared ffmpeg command, mapping failures to tool errors.
pub(crate) fn run_ffmpeg(mut cmd: Command) -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing::debug!("Running {:?}", cmd);

    let result = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::tool_not_found(crate::tools::FFMPEG)
        } else {
            Error::Io(e)
        }
    })?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(Error::tool_failed(
            crate::tools::FFMPEG,
            result.status.code(),
            stderr.trim(),
        ));
    }

    Ok(())
}
