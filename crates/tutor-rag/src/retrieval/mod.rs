//! Subject-scoped retrieval over the chunk index
//!
//! The index returns scored chunks; this layer scopes the search to a
//! subject and attaches 1-based ranks, which downstream context assembly
//! uses as citation labels.

use std::sync::Arc;

use crate::error::Result;
use crate::index::{ChunkFilter, ChunkIndex};
use crate::types::Chunk;

/// A retrieved chunk with its citation rank
#[derive(Debug, Clone)]
pub struct RankedChunk {
    /// The retrieved chunk
    pub chunk: Chunk,
    /// 1-based rank, densely assigned in similarity order
    pub rank: usize,
    /// Cosine similarity to the question
    pub similarity: f32,
}

/// Ordered retrieval output. Ranks run 1..=len() and similarities are
/// non-increasing; an empty result means no indexed material matched the
/// subject, which is an expected outcome rather than an error.
#[derive(Debug, Clone, Default)]
pub struct RetrievalResult {
    results: Vec<RankedChunk>,
}

impl RetrievalResult {
    /// Whether nothing was retrieved
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of retrieved chunks
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Iterate in rank order
    pub fn iter(&self) -> impl Iterator<Item = &RankedChunk> {
        self.results.iter()
    }
}

impl From<Vec<RankedChunk>> for RetrievalResult {
    fn from(results: Vec<RankedChunk>) -> Self {
        Self { results }
    }
}

/// Retrieves the chunks most relevant to a question within one subject
pub struct Retriever {
    index: Arc<ChunkIndex>,
}

impl Retriever {
    /// Create a retriever over the given index
    pub fn new(index: Arc<ChunkIndex>) -> Self {
        Self { index }
    }

    /// Retrieve up to `top_k` chunks for the question, restricted to the
    /// given subject. Fewer than `top_k` qualifying chunks is not an
    /// error; the result simply carries what matched.
    pub async fn retrieve(
        &self,
        question: &str,
        subject: &str,
        top_k: usize,
    ) -> Result<RetrievalResult> {
        let scored = self
            .index
            .query(question, &ChunkFilter::subject(subject), top_k)
            .await?;

        tracing::debug!(
            subject = %subject,
            retrieved = scored.len(),
            "retrieval complete"
        );

        let ranked: Vec<RankedChunk> = scored
            .into_iter()
            .enumerate()
            .map(|(i, s)| RankedChunk {
                chunk: s.chunk,
                rank: i + 1,
                similarity: s.similarity,
            })
            .collect();

        Ok(RetrievalResult::from(ranked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::HashEmbedder;
    use crate::types::DocumentMeta;

    async fn seeded_retriever() -> Retriever {
        let index = Arc::new(ChunkIndex::new(Arc::new(HashEmbedder::default())));
        let meta = DocumentMeta::new("Algebra Basics", "Mathematics", 9);
        let chunks = [
            "linear equations and how to solve them",
            "quadratic equations and the discriminant",
            "plotting functions on the coordinate plane",
            "prime factorization of integers",
            "probability of independent events",
        ]
        .iter()
        .enumerate()
        .map(|(i, text)| Chunk::new(&meta, 1, i as u32, text))
        .collect();
        index.upsert(chunks).await.unwrap();
        Retriever::new(index)
    }

    #[tokio::test]
    async fn ranks_are_dense_and_scores_non_increasing() {
        let retriever = seeded_retriever().await;
        let results = retriever
            .retrieve("solve linear equations", "Mathematics", 3)
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        let ranked: Vec<_> = results.iter().collect();
        for (i, r) in ranked.iter().enumerate() {
            assert_eq!(r.rank, i + 1);
        }
        for pair in ranked.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[tokio::test]
    async fn unscoped_subject_retrieves_nothing() {
        let retriever = seeded_retriever().await;
        let results = retriever
            .retrieve("solve linear equations", "Physics", 3)
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn fewer_matches_than_top_k_is_not_an_error() {
        let retriever = seeded_retriever().await;
        let results = retriever
            .retrieve("equations", "Mathematics", 50)
            .await
            .unwrap();
        assert_eq!(results.len(), 5);
    }
}
