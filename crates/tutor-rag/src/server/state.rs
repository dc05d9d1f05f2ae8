//! Application state for the tutor server

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::generation::OllamaClient;
use crate::index::ChunkIndex;
use crate::ingestion::{DocumentExtractor, PdfExtractor};
use crate::pipeline::TutorPipeline;
use crate::providers::{LlmProvider, OllamaEmbedder, OllamaLlm};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pipeline: TutorPipeline,
    extractor: Box<dyn DocumentExtractor>,
}

impl AppState {
    /// Create application state backed by Ollama providers and a PDF
    /// extractor. One HTTP client serves both embeddings and generation.
    pub fn new(config: RagConfig) -> Result<Self> {
        let ollama = Arc::new(OllamaClient::new(&config.llm)?);
        tracing::info!(
            base_url = %config.llm.base_url,
            embed_model = %config.llm.embed_model,
            generate_model = %config.llm.generate_model,
            "Ollama client initialized"
        );

        let embedder = Arc::new(OllamaEmbedder::from_client(
            ollama.clone(),
            config.embeddings.dimensions,
        ));
        let llm: Arc<dyn LlmProvider> = Arc::new(OllamaLlm::from_client(ollama));

        let index = Arc::new(ChunkIndex::new(embedder));
        let pipeline = TutorPipeline::new(&config, index, llm);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                pipeline,
                extractor: Box::new(PdfExtractor),
            }),
        })
    }

    /// Get the question-answering pipeline
    pub fn pipeline(&self) -> &TutorPipeline {
        &self.inner.pipeline
    }

    /// Get the document extractor
    pub fn extractor(&self) -> &dyn DocumentExtractor {
        self.inner.extractor.as_ref()
    }
}
