//! In-process provider doubles for unit tests

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::providers::{EmbeddingProvider, LlmProvider};

const HASH_DIMENSIONS: usize = 32;

/// Deterministic bag-of-words embedder. Texts sharing words land near
/// each other in cosine space, which is enough signal for ordering and
/// filtering tests without a model behind them.
#[derive(Default)]
pub struct HashEmbedder;

#[async_trait]
impl EmbeddingProvider for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut embedding = vec![0.0; HASH_DIMENSIONS];
        for word in text.to_lowercase().split_whitespace() {
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            embedding[(hasher.finish() as usize) % HASH_DIMENSIONS] += 1.0;
        }
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        HASH_DIMENSIONS
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "hash"
    }
}

/// LLM double that returns a fixed answer and counts invocations, so
/// tests can assert generation was (or was not) reached.
pub struct ScriptedLlm {
    answer: String,
    calls: AtomicUsize,
}

impl ScriptedLlm {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlm {
    async fn generate_answer(&self, _question: &str, _context: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

/// LLM double whose generation always fails
pub struct FailingLlm;

#[async_trait]
impl LlmProvider for FailingLlm {
    async fn generate_answer(&self, _question: &str, _context: &str) -> Result<String> {
        Err(Error::generation("model unavailable"))
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(false)
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn model(&self) -> &str {
        "failing"
    }
}
