use std::num::NonZeroUsize;
use std::slice;

use crate::ChunkError;

pub const DEFAULT_WORDS_PER_CHUNK: usize = 5000;

const DEFAULT_SIZE: NonZeroUsize = match NonZeroUsize::new(DEFAULT_WORDS_PER_CHUNK) {
    Some(words) => words,
    None => panic!("default chunk size must be non-zero"),
};

/// Validated, strictly positive number of words per chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSize(NonZeroUsize);

impl ChunkSize {
    pub fn new(words: i64) -> Result<Self, ChunkError> {
        usize::try_from(words)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or_else(|| {
                ChunkError::InvalidConfiguration(format!(
                    "words per chunk must be positive, got {words}"
                ))
            })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self(DEFAULT_SIZE)
    }
}

/// Whitespace tokens of a text, grouped into chunks of at most `size` words.
///
/// The token list is built once; [`WordChunker::chunks`] can be called any
/// number of times and always yields the same sequence.
#[derive(Debug, Clone)]
pub struct WordChunker<'a> {
    tokens: Vec<&'a str>,
    size: ChunkSize,
}

impl<'a> WordChunker<'a> {
    pub fn new(text: &'a str, size: ChunkSize) -> Self {
        Self {
            tokens: text.split_whitespace().collect(),
            size,
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of chunks [`Self::chunks`] yields: `ceil(tokens / size)`.
    pub fn total(&self) -> usize {
        self.tokens.len().div_ceil(self.size.get())
    }

    pub fn chunks(&self) -> WordChunks<'_, 'a> {
        WordChunks {
            inner: self.tokens.chunks(self.size.get()),
        }
    }
}

/// Lazy iterator over chunk strings, tokens re-joined with single spaces.
#[derive(Debug, Clone)]
pub struct WordChunks<'c, 'a> {
    inner: slice::Chunks<'c, &'a str>,
}

impl Iterator for WordChunks<'_, '_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|group| group.join(" "))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for WordChunks<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::{ChunkSize, WordChunker};
    use crate::ChunkError;

    fn size(words: i64) -> ChunkSize {
        ChunkSize::new(words).unwrap()
    }

    #[test]
    fn non_positive_sizes_are_rejected() {
        for words in [0, -1, i64::MIN] {
            let err = ChunkSize::new(words).unwrap_err();
            assert!(matches!(err, ChunkError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn default_size_is_five_thousand() {
        assert_eq!(ChunkSize::default().get(), 5000);
    }

    #[test]
    fn whitespace_is_normalized_to_single_spaces() {
        let text = "  alpha\tbeta\n\ngamma   delta  ";
        let chunker = WordChunker::new(text, size(3));
        let chunks: Vec<String> = chunker.chunks().collect();
        assert_eq!(chunks, vec!["alpha beta gamma", "delta"]);
    }

    #[test]
    fn empty_and_blank_text_yield_no_chunks() {
        for text in ["", "   \n\t "] {
            let chunker = WordChunker::new(text, size(4));
            assert_eq!(chunker.total(), 0);
            assert_eq!(chunker.chunks().count(), 0);
        }
    }

    #[test]
    fn chunks_can_be_iterated_again() {
        let chunker = WordChunker::new("a b c d e", size(2));
        let first: Vec<String> = chunker.chunks().collect();
        let second: Vec<String> = chunker.chunks().collect();
        assert_eq!(first, second);
        assert_eq!(chunker.chunks().len(), 3);
    }

    #[test]
    fn chunk_count_matches_ceiling_and_only_last_is_short() {
        let text: String = (0..47).map(|i| format!("w{i} ")).collect();
        for words in 1..=50 {
            let chunker = WordChunker::new(&text, size(words));
            let chunks: Vec<String> = chunker.chunks().collect();
            let words = words as usize;
            assert_eq!(chunks.len(), 47usize.div_ceil(words));
            assert_eq!(chunks.len(), chunker.total());
            let (last, full) = chunks.split_last().unwrap();
            for chunk in full {
                assert_eq!(chunk.split_whitespace().count(), words);
            }
            assert!(last.split_whitespace().count() <= words);
        }
    }

    #[test]
    fn rejoined_chunks_preserve_token_sequence() {
        let text = "The quick\nbrown fox,  jumps\tover the lazy dog. Again!";
        let expected: Vec<&str> = text.split_whitespace().collect();
        for words in 1..=12 {
            let chunker = WordChunker::new(text, size(words));
            let joined = chunker.chunks().collect::<Vec<_>>().join(" ");
            let tokens: Vec<&str> = joined.split_whitespace().collect();
            assert_eq!(tokens, expected);
        }
    }
}
