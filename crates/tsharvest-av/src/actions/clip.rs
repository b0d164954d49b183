//! Time-range clipping.

use super::run_ffmpeg;
use crate::{Error, Result, Workspace};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Cut `start..end` out of `input` into `output` with stream copy.
///
/// Times are handed to ffmpeg as given, typically `HH:MM:SS.mmm`. Because
/// streams are copied, cut points snap to the nearest keyframes.
pub fn clip(ffmpeg: &Path, input: &Path, start: &str, end: &str, output: &Path) -> Result<PathBuf> {
    if !input.exists() {
        return Err(Error::input_not_found(input));
    }
    validate_timestamp("start", start)?;
    validate_timestamp("end", end)?;

    let workspace = Workspace::new(output)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Clipping {:?} [{} - {}] to {:?}", input, start, end, output);

    let mut cmd = Command::new(ffmpeg);
    cmd.args(["-y", "-i"])
        .arg(input)
        .args(["-ss", start, "-to", end, "-c", "copy"])
        .arg(workspace.output());

    run_ffmpeg(cmd)?;

    workspace.finalize()
}

/// Accept `[[HH:]MM:]SS[.fff]` timestamps.
fn validate_timestamp(label: &'static str, value: &str) -> Result<()> {
    let invalid = || Error::InvalidTimestamp {
        label,
        value: value.to_string(),
    };

    let value = value.trim();
    if value.is_empty() {
        return Err(invalid());
    }

    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() > 3 {
        return Err(invalid());
    }

    let (seconds, rest) = parts.split_last().ok_or_else(invalid)?;
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    if !rest.iter().all(|p| digits(*p)) {
        return Err(invalid());
    }

    let mut split = seconds.splitn(2, '.');
    let whole = split.next().unwrap_or_default();
    if !digits(whole) || !split.next().map_or(true, digits) {
        return Err(invalid());
    }

    Ok(())
}
