use std::path::{Path, PathBuf};

use harvest_logging::harvest_debug;

use crate::persist::ChunkDir;
use crate::{ChunkError, WordChunker};

/// `chunk_{index:03}.txt`; indices past 999 widen the field.
pub fn chunk_filename(index: usize) -> String {
    format!("chunk_{index:03}.txt")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkEvent {
    ChunkWritten {
        index: usize,
        total: usize,
        path: PathBuf,
    },
}

pub trait ProgressSink {
    fn emit(&self, event: ChunkEvent);
}

/// Prints `Wrote <path> (<index>/<total>)` for every chunk.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutProgressSink;

impl ProgressSink for StdoutProgressSink {
    fn emit(&self, event: ChunkEvent) {
        match event {
            ChunkEvent::ChunkWritten { index, total, path } => {
                println!("Wrote {} ({index}/{total})", path.display());
            }
        }
    }
}

/// Writes numbered chunk files into one directory.
#[derive(Debug, Clone)]
pub struct ChunkWriter {
    dir: ChunkDir,
}

impl ChunkWriter {
    /// Creates `dir` (and missing parents) if absent.
    pub fn create(dir: &Path) -> Result<Self, ChunkError> {
        Ok(Self {
            dir: ChunkDir::open(dir)?,
        })
    }

    /// Writes every chunk in order, numbering from 1, and reports each write to `sink`.
    pub fn write_chunks(
        &self,
        chunker: &WordChunker<'_>,
        sink: &dyn ProgressSink,
    ) -> Result<Vec<PathBuf>, ChunkError> {
        let total = chunker.total();
        let mut written = Vec::with_capacity(total);
        for (offset, chunk) in chunker.chunks().enumerate() {
            let index = offset + 1;
            let path = self.dir.replace(&chunk_filename(index), &chunk)?;
            harvest_debug!("Chunk {index}/{total} written to {:?}", path);
            sink.emit(ChunkEvent::ChunkWritten {
                index,
                total,
                path: path.clone(),
            });
            written.push(path);
        }
        Ok(written)
    }
}
