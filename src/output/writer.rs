//! Local clip file writer

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};

/// Writes downloaded clip bytes to disk.
///
/// Writes go to a temporary file in the destination directory first and
/// are renamed into place, so an interrupted save never leaves a partial
/// clip at the destination path.
pub struct ClipWriter;

impl ClipWriter {
    /// Create a new clip writer
    pub fn new() -> Self {
        Self
    }

    /// Save clip bytes to `dest`, returning the number of bytes written
    pub fn save(&self, dest: &Path, bytes: &[u8]) -> DomainResult<u64> {
        if bytes.is_empty() {
            return Err(DomainError::InvalidClip(
                "backend returned an empty clip body".to_string(),
            ));
        }

        let dir = dest.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = dir {
            std::fs::create_dir_all(dir)?;
        }

        let mut temp = match dir {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new_in(".")?,
        };
        temp.write_all(bytes)?;
        temp.flush()?;

        temp.persist(dest).map_err(|e| DomainError::Io(e.error))?;

        info!("Saved {} bytes to {}", bytes.len(), dest.display());
        Ok(bytes.len() as u64)
    }
}

impl Default for ClipWriter {
    fn default() -> Self {
        Self::new()
    }
}
