//! LLM provider trait for generating answers

use async_trait::async_trait;

use crate::error::Result;

/// Trait for LLM-based answer generation.
///
/// The pipeline supplies the question and the assembled, citation-labeled
/// context; the implementation wraps them in the fixed tutor instruction
/// template and returns free-form answer text. Failures and timeouts
/// surface as `Error::Generation` and are never retried automatically.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate an answer grounded in the given context
    async fn generate_answer(&self, question: &str, context: &str) -> Result<String>;

    /// Check if the provider is reachable
    async fn health_check(&self) -> Result<bool>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// The model being used
    fn model(&self) -> &str;
}
