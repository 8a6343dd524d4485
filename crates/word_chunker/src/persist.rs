use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{0} exists and is not a directory")]
    NotADirectory(PathBuf),
    #[error("cannot create output directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Output directory for chunk files.
///
/// Every write is staged in a sibling temp file and renamed over the target,
/// so a reader sees either the previous chunk or the new one.
#[derive(Debug, Clone)]
pub struct ChunkDir {
    path: PathBuf,
}

impl ChunkDir {
    /// Opens `path`, creating it and any missing parents.
    pub fn open(path: &Path) -> Result<Self, PersistError> {
        if path.exists() && !path.is_dir() {
            return Err(PersistError::NotADirectory(path.to_path_buf()));
        }
        fs::create_dir_all(path).map_err(|source| PersistError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn replace(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        let target = self.path.join(filename);
        let mut staged = NamedTempFile::new_in(&self.path)?;
        staged.write_all(content.as_bytes())?;
        staged.flush()?;
        staged
            .persist(&target)
            .map_err(|err| PersistError::Io(err.error))?;
        Ok(target)
    }
}
