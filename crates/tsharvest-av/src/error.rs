//! Error types for tsharvest-av.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// ffmpeg could not be located or spawned.
    #[error("{tool} not found; install it or set [tools] ffmpeg_path")]
    ToolNotFound { tool: String },

    /// ffmpeg ran and exited unsuccessfully.
    #[error("{tool} exited with {}: {stderr}", exit_label(.status))]
    ToolFailed {
        tool: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("input not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("invalid {label} time {value:?}; expected [[HH:]MM:]SS[.fff]")]
    InvalidTimestamp { label: &'static str, value: String },

    #[error("output path has no file name: {}", path.display())]
    InvalidOutput { path: PathBuf },

    /// Creating the staging directory or moving the staged file failed.
    #[error("staging {} failed: {source}", path.display())]
    Staging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tool succeeded without writing its output file.
    #[error("{tool} produced no output at {}", path.display())]
    NoOutput { tool: String, path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn exit_label(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

impl Error {
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    pub fn tool_failed(tool: impl Into<String>, status: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            status,
            stderr: stderr.into(),
        }
    }

    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    pub fn staging(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Staging {
            path: path.into(),
            source,
        }
    }
}
