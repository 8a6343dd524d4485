//! Word chunker: read a document, split it into word-bounded chunks, write them out.
mod chunk;
mod error;
mod persist;
mod pipeline;
mod reader;
mod writer;

pub use chunk::{ChunkSize, WordChunker, WordChunks, DEFAULT_WORDS_PER_CHUNK};
pub use error::ChunkError;
pub use pipeline::split_file;
pub use persist::{ChunkDir, PersistError};
pub use reader::{
    is_structured_path, ensure_capability, read_document, structured_format_support, Document,
};
pub use writer::{chunk_filename, ChunkEvent, ChunkWriter, ProgressSink, StdoutProgressSink};
