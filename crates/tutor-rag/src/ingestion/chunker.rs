//! Paragraph chunking with page and position tracking

use crate::config::ChunkingConfig;
use crate::types::{Chunk, DocumentMeta, Page};

/// Splits extracted page text into paragraph-sized chunks.
///
/// The unit of retrieval is a paragraph: blank-line boundaries within each
/// page delimit candidates, and anything shorter than `min_len` after
/// trimming is dropped as noise (headers, page numbers, stray whitespace).
pub struct ParagraphChunker {
    /// Minimum trimmed candidate length in characters
    min_len: usize,
}

impl ParagraphChunker {
    /// Create a chunker with an explicit minimum length
    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// Create a chunker from configuration
    pub fn from_config(config: &ChunkingConfig) -> Self {
        Self::new(config.min_chunk_len)
    }

    /// Chunk extracted pages into candidates, lazily and in stable order.
    ///
    /// `sequence_index` is the candidate's position within its page,
    /// counted after filtering, starting at 0. A page that yields no
    /// candidates contributes nothing; sparse or image-only pages are
    /// expected.
    pub fn chunk<'a>(
        &'a self,
        meta: &'a DocumentMeta,
        pages: &'a [Page],
    ) -> impl Iterator<Item = Chunk> + 'a {
        pages.iter().flat_map(move |page| {
            page.raw_text
                .split("\n\n")
                .map(str::trim)
                .filter(|paragraph| paragraph.chars().count() >= self.min_len)
                .enumerate()
                .map(move |(index, paragraph)| {
                    Chunk::new(meta, page.page_number, index as u32, paragraph)
                })
        })
    }
}

impl Default for ParagraphChunker {
    fn default() -> Self {
        Self::from_config(&ChunkingConfig::default())
    }
}
