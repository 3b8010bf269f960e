//! Delivery of encoded artifacts.
//!
//! A [`FileSink`] receives a finished [`ExportArtifact`] and persists it
//! somewhere. Sinks never see partially encoded data: the whole document is
//! built in memory before delivery starts.

use super::ExportArtifact;
use crate::common::{Error, Result};
use parking_lot::Mutex;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Destination for exported files.
pub trait FileSink {
    /// Persist the artifact under its file name.
    fn deliver(&self, artifact: &ExportArtifact) -> Result<()>;
}

impl<S: FileSink + ?Sized> FileSink for &S {
    fn deliver(&self, artifact: &ExportArtifact) -> Result<()> {
        (**self).deliver(artifact)
    }
}

/// Writes artifacts into a directory.
///
/// Content is first written to a staging file inside the target directory and
/// then renamed over `<dir>/<filename>`. If anything fails the staging file is
/// removed when its handle drops, so a failed delivery leaves no partial file.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path an artifact with this file name is delivered to.
    ///
    /// The name must be a single plain path component; absolute paths,
    /// separators and `.`/`..` are rejected so delivery stays inside the
    /// directory.
    pub fn target_path(&self, filename: &str) -> Result<PathBuf> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == filename => Ok(self.dir.join(name)),
            _ => Err(Error::InvalidFileName(filename.to_string())),
        }
    }
}

impl FileSink for DirectorySink {
    fn deliver(&self, artifact: &ExportArtifact) -> Result<()> {
        let target = self.target_path(&artifact.filename)?;

        let mut staging = NamedTempFile::new_in(&self.dir)?;
        debug!(staging = %staging.path().display(), "staging export");
        staging.write_all(artifact.content.as_bytes())?;
        staging.as_file().sync_all()?;
        staging.persist(&target).map_err(|e| e.error)?;

        info!(
            path = %target.display(),
            media_type = %artifact.media_type,
            bytes = artifact.content.len(),
            "export written"
        );
        Ok(())
    }
}

/// Keeps delivered artifacts in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<ExportArtifact>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of everything delivered so far, oldest first.
    pub fn artifacts(&self) -> Vec<ExportArtifact> {
        self.delivered.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.delivered.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.delivered.lock().is_empty()
    }

    /// Remove and return everything delivered so far.
    pub fn take(&self) -> Vec<ExportArtifact> {
        std::mem::take(&mut *self.delivered.lock())
    }
}

impl FileSink for MemorySink {
    fn deliver(&self, artifact: &ExportArtifact) -> Result<()> {
        self.delivered.lock().push(artifact.clone());
        Ok(())
    }
}
