//! Provider abstractions for embeddings and answer generation
//!
//! These trait seams keep the external collaborators opaque: any function
//! from text to a fixed-dimension vector satisfies `EmbeddingProvider`,
//! and any text-completion service satisfies `LlmProvider`. Swapping an
//! implementation must not change index or pipeline logic.

pub mod embedding;
pub mod llm;
pub mod ollama;

pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use ollama::{OllamaEmbedder, OllamaLlm};
