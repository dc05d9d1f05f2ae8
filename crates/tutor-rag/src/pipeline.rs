//! End-to-end tutoring pipeline: ingest textbook pages, answer questions
//!
//! Owns the chunker, index, retriever, and LLM provider. Generation is
//! only reached when retrieval produced context; an empty retrieval is a
//! terminal outcome answered with a fixed message and no model call.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::{Error, Result};
use crate::generation::assemble;
use crate::index::ChunkIndex;
use crate::ingestion::ParagraphChunker;
use crate::providers::LlmProvider;
use crate::retrieval::Retriever;
use crate::types::{Answer, Confidence, DocumentMeta, Health, IngestSummary, Page};

/// Answer returned without consulting the model when no indexed material
/// matched the subject.
pub const NO_CONTEXT_ANSWER: &str = "I don't have any textbook information loaded for this subject yet. Please ask your teacher to upload the textbook.";

/// Subject-scoped question answering over ingested textbooks
pub struct TutorPipeline {
    index: Arc<ChunkIndex>,
    retriever: Retriever,
    llm: Arc<dyn LlmProvider>,
    chunker: ParagraphChunker,
    default_top_k: usize,
}

impl TutorPipeline {
    /// Assemble a pipeline from its parts
    pub fn new(
        config: &RagConfig,
        index: Arc<ChunkIndex>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            retriever: Retriever::new(index.clone()),
            index,
            llm,
            chunker: ParagraphChunker::from_config(&config.chunking),
            default_top_k: config.retrieval.top_k,
        }
    }

    /// Chunk and index the pages of one textbook.
    ///
    /// A document with no pages is an extraction failure and is rejected.
    /// Pages that produce no chunks (all paragraphs below the length
    /// floor) are fine; the summary then reports zero chunks processed.
    /// Re-ingesting the same document overwrites its chunks in place.
    pub async fn ingest(&self, meta: &DocumentMeta, pages: &[Page]) -> Result<IngestSummary> {
        if pages.is_empty() {
            return Err(Error::extraction(
                &meta.title,
                "document contains no pages",
            ));
        }

        let chunks: Vec<_> = self.chunker.chunk(meta, pages).collect();
        let total_pages = pages.len();

        tracing::info!(
            title = %meta.title,
            subject = %meta.subject,
            pages = total_pages,
            chunks = chunks.len(),
            "ingesting textbook"
        );

        let chunks_processed = self.index.upsert(chunks).await?;

        Ok(IngestSummary {
            chunks_processed,
            total_pages,
        })
    }

    /// Answer a question against the material indexed for one subject.
    ///
    /// Retrieval that finds nothing short-circuits to the fixed
    /// no-context answer with confidence `none` and no sources; the model
    /// is never called in that case.
    pub async fn ask(&self, subject: &str, question: &str, top_k: usize) -> Result<Answer> {
        let top_k = if top_k == 0 { self.default_top_k } else { top_k };

        let results = self.retriever.retrieve(question, subject, top_k).await?;
        let assembled = assemble(&results);

        if assembled.confidence == Confidence::None {
            tracing::info!(subject = %subject, "no indexed material for subject");
            return Ok(Answer {
                answer: NO_CONTEXT_ANSWER.to_string(),
                sources: Vec::new(),
                confidence: Confidence::None,
            });
        }

        let answer = self
            .llm
            .generate_answer(question, &assembled.context)
            .await?;

        Ok(Answer {
            answer,
            sources: assembled.sources,
            confidence: assembled.confidence,
        })
    }

    /// Subjects with at least one indexed chunk
    pub fn list_subjects(&self) -> BTreeSet<String> {
        self.index.subjects()
    }

    /// Service diagnostics
    pub fn health(&self) -> Health {
        Health::healthy(self.index.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{FailingLlm, HashEmbedder, ScriptedLlm};

    fn pipeline_with(llm: Arc<dyn LlmProvider>) -> TutorPipeline {
        let config = RagConfig::default();
        let index = Arc::new(ChunkIndex::new(Arc::new(HashEmbedder::default())));
        TutorPipeline::new(&config, index, llm)
    }

    fn algebra_pages() -> (DocumentMeta, Vec<Page>) {
        let meta = DocumentMeta::new("Algebra Basics", "Mathematics", 9);
        let pages = vec![Page {
            page_number: 1,
            raw_text: "A linear equation is an equation of degree one with a single unknown.\n\n\
                       Quadratic equations have degree two and may have zero, one, or two real roots.\n\n\
                       tiny"
                .to_string(),
        }];
        (meta, pages)
    }

    #[tokio::test]
    async fn ingest_reports_chunks_and_pages() {
        let pipeline = pipeline_with(Arc::new(ScriptedLlm::new("ok")));
        let (meta, pages) = algebra_pages();

        let summary = pipeline.ingest(&meta, &pages).await.unwrap();
        assert_eq!(summary.chunks_processed, 2);
        assert_eq!(summary.total_pages, 1);
    }

    #[tokio::test]
    async fn ingest_rejects_empty_document() {
        let pipeline = pipeline_with(Arc::new(ScriptedLlm::new("ok")));
        let meta = DocumentMeta::new("Empty", "Mathematics", 9);

        let err = pipeline.ingest(&meta, &[]).await.unwrap_err();
        assert!(matches!(err, Error::Extraction { .. }));
    }

    #[tokio::test]
    async fn reingest_overwrites_instead_of_duplicating() {
        let pipeline = pipeline_with(Arc::new(ScriptedLlm::new("ok")));
        let (meta, pages) = algebra_pages();

        pipeline.ingest(&meta, &pages).await.unwrap();
        pipeline.ingest(&meta, &pages).await.unwrap();

        let health = pipeline.health();
        assert_eq!(health.chunks_indexed, 2);
        assert_eq!(health.status, "healthy");
    }

    #[tokio::test]
    async fn ask_answers_from_indexed_material() {
        let llm = Arc::new(ScriptedLlm::new("A linear equation has degree one."));
        let pipeline = pipeline_with(llm.clone());
        let (meta, pages) = algebra_pages();
        pipeline.ingest(&meta, &pages).await.unwrap();

        let answer = pipeline
            .ask("Mathematics", "What is a linear equation?", 3)
            .await
            .unwrap();

        assert_eq!(answer.answer, "A linear equation has degree one.");
        assert_eq!(answer.confidence, Confidence::High);
        assert_eq!(answer.sources.len(), 2);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn empty_retrieval_short_circuits_generation() {
        let llm = Arc::new(ScriptedLlm::new("should never be returned"));
        let pipeline = pipeline_with(llm.clone());
        let (meta, pages) = algebra_pages();
        pipeline.ingest(&meta, &pages).await.unwrap();

        let answer = pipeline
            .ask("Physics", "What is momentum?", 3)
            .await
            .unwrap();

        assert_eq!(answer.answer, NO_CONTEXT_ANSWER);
        assert_eq!(answer.confidence, Confidence::None);
        assert!(answer.sources.is_empty());
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn generation_failure_surfaces_as_generation_error() {
        let pipeline = pipeline_with(Arc::new(FailingLlm));
        let (meta, pages) = algebra_pages();
        pipeline.ingest(&meta, &pages).await.unwrap();

        let err = pipeline
            .ask("Mathematics", "What is a linear equation?", 3)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
    }

    #[tokio::test]
    async fn zero_top_k_falls_back_to_configured_default() {
        let llm = Arc::new(ScriptedLlm::new("ok"));
        let pipeline = pipeline_with(llm);
        let (meta, pages) = algebra_pages();
        pipeline.ingest(&meta, &pages).await.unwrap();

        let answer = pipeline
            .ask("Mathematics", "What is a linear equation?", 0)
            .await
            .unwrap();
        assert!(!answer.sources.is_empty());
    }

    #[tokio::test]
    async fn list_subjects_reflects_ingested_material() {
        let pipeline = pipeline_with(Arc::new(ScriptedLlm::new("ok")));
        let (meta, pages) = algebra_pages();
        pipeline.ingest(&meta, &pages).await.unwrap();

        let subjects = pipeline.list_subjects();
        assert_eq!(subjects.len(), 1);
        assert!(subjects.contains("Mathematics"));
    }
}
