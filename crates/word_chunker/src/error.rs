use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::persist::PersistError;

#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("cannot read .{extension} files: {hint}")]
    UnsupportedFormat { extension: String, hint: String },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failed to decode {path:?}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}
