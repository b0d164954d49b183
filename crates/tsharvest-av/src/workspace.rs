//! Staging directories for tool output.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Staging area for one tool run.
///
/// The temporary directory is created next to the destination so the final
/// move is a rename on the same filesystem. Dropping the workspace without
/// finalizing discards whatever the tool wrote.
///
/// # Example
///
/// ```no_run
/// use tsharvest_av::Workspace;
///
/// let workspace = Workspace::new("/videos/movie.mp4")?;
/// // Point the tool at workspace.output()
/// workspace.finalize()?;
/// # Ok::<(), tsharvest_av::Error>(())
/// ```
pub struct Workspace {
    temp_dir: TempDir,
    output_path: PathBuf,
    destination: PathBuf,
}

impl Workspace {
    /// Create a workspace for producing `destination`.
    pub fn new<P: AsRef<Path>>(destination: P) -> Result<Self> {
        let destination = destination.as_ref().to_path_buf();

        let file_name = destination
            .file_name()
            .ok_or_else(|| Error::InvalidOutput {
                path: destination.clone(),
            })?;

        let parent = match destination.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let temp_dir = tempfile::Builder::new()
            .prefix(".tsharvest-")
            .tempdir_in(&parent)
            .map_err(|e| Error::staging(&parent, e))?;

        let output_path = temp_dir.path().join(file_name);

        Ok(Self {
            temp_dir,
            output_path,
            destination,
        })
    }

    /// Path the tool should write to.
    pub fn output(&self) -> &Path {
        &self.output_path
    }

    /// Final location of the output.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Get the temp directory path.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Move the staged output to its destination, replacing any existing file.
    pub fn finalize(self) -> Result<PathBuf> {
        if !self.output_path.exists() {
            return Err(Error::NoOutput {
                tool: crate::tools::FFMPEG.to_string(),
                path: self.output_path.clone(),
            });
        }

        std::fs::rename(&self.output_path, &self.destination)
            .map_err(|e| Error::staging(&self.destination, e))?;

        Ok(self.destination)
    }
}
