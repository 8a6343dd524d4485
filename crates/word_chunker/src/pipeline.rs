use std::path::{Path, PathBuf};

use harvest_logging::harvest_info;

use crate::{
    ensure_capability, read_document, ChunkError, ChunkSize, ChunkWriter, ProgressSink, WordChunker,
};

/// Read `input`, split it into chunks of `size` words and write them under `outdir`.
///
/// Returns the written paths in chunk order.
pub fn split_file(
    input: &Path,
    size: ChunkSize,
    outdir: &Path,
    sink: &dyn ProgressSink,
) -> Result<Vec<PathBuf>, ChunkError> {
    ensure_capability(input)?;
    let document = read_document(input)?;
    let chunker = WordChunker::new(&document.text, size);
    harvest_info!(
        "Splitting {:?}: {} words into {} chunks of up to {} words",
        document.source,
        chunker.token_count(),
        chunker.total(),
        size.get()
    );
    let writer = ChunkWriter::create(outdir)?;
    writer.write_chunks(&chunker, sink)
}
