use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const SEPARATOR_WIDTH: usize = 40;

/// Appends posts to a single text transcript.
///
/// A title is framed by underscore rules; each body block is followed by a newline.
pub struct TranscriptWriter<W: Write> {
    out: W,
    posts: usize,
}

impl TranscriptWriter<BufWriter<File>> {
    /// Creates (or truncates) `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> TranscriptWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, posts: 0 }
    }

    pub fn posts_written(&self) -> usize {
        self.posts
    }

    pub fn write_post(&mut self, post: &crate::Post) -> io::Result<()> {
        if let Some(title) = &post.title {
            let rule = "_".repeat(SEPARATOR_WIDTH);
            write!(self.out, "\n{rule}\n\n{title}\n{rule}\n")?;
        }
        for block in &post.body {
            writeln!(self.out, "{block}")?;
        }
        self.posts += 1;
        Ok(())
    }

    /// Flushes buffered output and hands back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
