//! Nearest-neighbor chunk index with metadata filtering
//!
//! Chunks are stored keyed by their content-addressed id with an embedding
//! computed through the injected `EmbeddingProvider`. Search is an exact
//! cosine-similarity scan over the filtered entries; the store is small
//! enough per deployment (one school's textbooks) that an approximate
//! index would buy nothing.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::providers::EmbeddingProvider;
use crate::types::{subject_key, Chunk};

/// A chunk scored against a query embedding
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    /// The retrieved chunk
    pub chunk: Chunk,
    /// Cosine similarity to the query (higher is better)
    pub similarity: f32,
}

/// Conjunctive exact-match metadata filter. Every populated field must
/// match for an entry to qualify; subjects are compared in normalized
/// form so "Math" and "math" select the same partition.
#[derive(Debug, Clone, Default)]
pub struct ChunkFilter {
    /// Subject partition
    pub subject: Option<String>,
    /// Source textbook title
    pub source_title: Option<String>,
    /// Grade level
    pub grade_level: Option<u8>,
}

impl ChunkFilter {
    /// Filter on subject only
    pub fn subject(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            ..Self::default()
        }
    }

    fn matches(&self, chunk: &Chunk) -> bool {
        if let Some(subject) = &self.subject {
            if subject_key(subject) != subject_key(&chunk.subject) {
                return false;
            }
        }
        if let Some(title) = &self.source_title {
            if title != &chunk.source_title {
                return false;
            }
        }
        if let Some(grade) = self.grade_level {
            if grade != chunk.grade_level {
                return false;
            }
        }
        true
    }
}

struct IndexEntry {
    chunk: Chunk,
    embedding: Vec<f32>,
}

/// In-memory nearest-neighbor store of embedded chunks.
///
/// Concurrent reads and upserts are safe; each upsert commits one chunk
/// at a time, so a query running mid-ingestion may miss chunks not yet
/// committed but never sees a partially written one.
pub struct ChunkIndex {
    embedder: Arc<dyn EmbeddingProvider>,
    entries: RwLock<HashMap<String, IndexEntry>>,
}

impl ChunkIndex {
    /// Create an index over the given embedding provider
    pub fn new(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            embedder,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Embed and store chunks, returning the number written.
    ///
    /// Entries are keyed by the deterministic chunk id, so re-upserting a
    /// chunk with the same identity overwrites instead of duplicating.
    /// Embedding happens outside the lock; each chunk commits
    /// individually, so concurrent queries may observe a partially
    /// ingested batch but never a partially written entry.
    pub async fn upsert(&self, chunks: Vec<Chunk>) -> Result<usize> {
        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;

        let mut written = 0;
        for (chunk, embedding) in chunks.into_iter().zip(embeddings) {
            self.entries
                .write()
                .insert(chunk.id.clone(), IndexEntry { chunk, embedding });
            written += 1;
        }
        Ok(written)
    }

    /// Search for the chunks most similar to `query_text` among entries
    /// matching the filter.
    ///
    /// The query embedding is computed once. Returns at most `limit`
    /// results by decreasing similarity. A filter value no chunk carries
    /// yields an empty result, not an error: "no textbook loaded for this
    /// subject" is an expected outcome.
    pub async fn query(
        &self,
        query_text: &str,
        filter: &ChunkFilter,
        limit: usize,
    ) -> Result<Vec<ScoredChunk>> {
        let query_embedding = self.embedder.embed(query_text).await?;

        let mut scored: Vec<ScoredChunk> = {
            let entries = self.entries.read();
            entries
                .values()
                .filter(|entry| filter.matches(&entry.chunk))
                .map(|entry| ScoredChunk {
                    similarity: cosine_similarity(&query_embedding, &entry.embedding),
                    chunk: entry.chunk.clone(),
                })
                .collect()
        };

        // Chunk id as tie-break keeps ordering stable across runs.
        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.chunk.id.cmp(&b.chunk.id))
        });
        scored.truncate(limit);

        Ok(scored)
    }

    /// Total indexed chunks
    pub fn count(&self) -> usize {
        self.entries.read().len()
    }

    /// Distinct subjects across all indexed chunks, in display form.
    /// O(n) over stored metadata; this is a diagnostic, not a hot path.
    pub fn subjects(&self) -> BTreeSet<String> {
        self.entries
            .read()
            .values()
            .map(|entry| entry.chunk.subject.clone())
            .collect()
    }
}

/// Cosine similarity between two vectors; 0.0 for mismatched or
/// degenerate inputs.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denominator = (norm_a * norm_b).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    dot / denominator
}
