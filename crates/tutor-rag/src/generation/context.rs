//! Assembles retrieved chunks into a bounded prompt context

use crate::retrieval::RetrievalResult;
use crate::types::{Confidence, SourceRef};

/// Formatted context with aligned citations and a confidence label
#[derive(Debug, Clone)]
pub struct AssembledContext {
    /// Labeled context blocks in rank order; empty when nothing was
    /// retrieved
    pub context: String,
    /// Citations mirroring the context blocks positionally
    pub sources: Vec<SourceRef>,
    /// Retrieval sufficiency label
    pub confidence: Confidence,
}

impl AssembledContext {
    /// Sentinel for the no-retrieval terminal case
    fn empty() -> Self {
        Self {
            context: String::new(),
            sources: Vec::new(),
            confidence: Confidence::None,
        }
    }
}

/// Format retrieved chunks as labeled context blocks.
///
/// Each block reads `[Source <rank>, Page <page>]: <text>`, joined by
/// blank lines in rank order. The labeling is the citation contract: the
/// generation service cites by source number, and callers align a cited
/// number to the `sources` list positionally. An empty result yields the
/// sentinel empty context with confidence `None`; the pipeline
/// short-circuits generation on it.
pub fn assemble(results: &RetrievalResult) -> AssembledContext {
    if results.is_empty() {
        return AssembledContext::empty();
    }

    let context = results
        .iter()
        .map(|r| {
            format!(
                "[Source {}, Page {}]: {}",
                r.rank, r.chunk.page_number, r.chunk.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let sources = results
        .iter()
        .map(|r| SourceRef {
            title: r.chunk.source_title.clone(),
            page: r.chunk.page_number,
            rank: r.rank,
        })
        .collect();

    AssembledContext {
        context,
        sources,
        confidence: Confidence::from_result_count(results.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::RankedChunk;
    use crate::types::{Chunk, DocumentMeta};

    fn ranked(rank: usize, page: u32, text: &str, similarity: f32) -> RankedChunk {
        let meta = DocumentMeta::new("Algebra Basics", "Mathematics", 9);
        RankedChunk {
            chunk: Chunk::new(&meta, page, 0, text),
            rank,
            similarity,
        }
    }

    #[test]
    fn empty_results_yield_none_sentinel() {
        let assembled = assemble(&RetrievalResult::default());
        assert!(assembled.context.is_empty());
        assert!(assembled.sources.is_empty());
        assert_eq!(assembled.confidence, Confidence::None);
    }

    #[test]
    fn single_result_is_medium_confidence() {
        let results = RetrievalResult::from(vec![ranked(1, 4, "linear equations", 0.9)]);
        let assembled = assemble(&results);
        assert_eq!(assembled.confidence, Confidence::Medium);
        assert_eq!(assembled.context, "[Source 1, Page 4]: linear equations");
    }

    #[test]
    fn blocks_are_labeled_and_joined_in_rank_order() {
        let results = RetrievalResult::from(vec![
            ranked(1, 4, "first paragraph", 0.9),
            ranked(2, 7, "second paragraph", 0.5),
        ]);
        let assembled = assemble(&results);

        assert_eq!(assembled.confidence, Confidence::High);
        assert_eq!(
            assembled.context,
            "[Source 1, Page 4]: first paragraph\n\n[Source 2, Page 7]: second paragraph"
        );
    }

    #[test]
    fn sources_mirror_ranks_positionally() {
        let results = RetrievalResult::from(vec![
            ranked(1, 4, "first", 0.9),
            ranked(2, 7, "second", 0.5),
        ]);
        let assembled = assemble(&results);

        assert_eq!(assembled.sources.len(), 2);
        assert_eq!(assembled.sources[0].rank, 1);
        assert_eq!(assembled.sources[0].page, 4);
        assert_eq!(assembled.sources[1].rank, 2);
        assert_eq!(assembled.sources[1].page, 7);
        assert_eq!(assembled.sources[0].title, "Algebra Basics");
    }
}
