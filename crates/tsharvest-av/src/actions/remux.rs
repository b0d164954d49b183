//! Container remuxing of assembled streams.

use super::run_ffmpeg;
use crate::{Error, Result, Workspace};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Supported container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// MPEG-4 Part 14 container
    Mp4,
    /// Matroska container
    Mkv,
    /// QuickTime container
    Mov,
    /// MPEG transport stream
    Ts,
}

impl Container {
    /// Infer the container from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str()?.parse().ok()
    }

    /// Muxer options ffmpeg needs for this container.
    fn ffmpeg_args(&self) -> &'static [&'static str] {
        match self {
            Container::Mp4 | Container::Mov => &["-movflags", "+faststart"],
            Container::Ts => &["-f", "mpegts"],
            Container::Mkv => &[],
        }
    }
}

impl std::str::FromStr for Container {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mp4" | "m4v" => Ok(Container::Mp4),
            "mkv" | "matroska" => Ok(Container::Mkv),
            "mov" | "quicktime" => Ok(Container::Mov),
            "ts" | "mpegts" => Ok(Container::Ts),
            _ => Err(format!("Unknown container format: {}", s)),
        }
    }
}

/// Remux an assembled transport stream into the container named by `output`.
///
/// All streams are copied without re-encoding. The container is inferred
/// from the output extension; unknown extensions are left to ffmpeg. The
/// result only appears at `output` if ffmpeg succeeds.
pub fn remux_stream(ffmpeg: &Path, input: &Path, output: &Path) -> Result<PathBuf> {
    if !input.exists() {
        return Err(Error::input_not_found(input));
    }

    let workspace = Workspace::new(output)?;
    let container = Container::from_path(output);

    #[cfg(feature = "tracing")]
    tracing::info!("Remuxing {:?} to {:?} ({:?})", input, output, container);

    let mut cmd = Command::new(ffmpeg);
    cmd.args(["-y", "-i"]).arg(input).args(["-c", "copy"]);

    if let Some(container) = container {
        cmd.args(container.ffmpeg_args());
    }

    cmd.arg(workspace.output());

    run_ffmpeg(cmd)?;

    let output = workspace.finalize()?;

    #[cfg(feature = "tracing")]
    tracing::info!("Remux complete: {:?}", output);

    Ok(output)
}
