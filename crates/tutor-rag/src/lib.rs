//! tutor-rag: Subject-scoped textbook Q&A with page-level citations
//!
//! Textbooks are uploaded per subject, chunked into paragraphs, and
//! embedded into an in-memory index. Student questions retrieve the most
//! relevant chunks for their subject and an LLM answers from that context
//! only, citing the pages it drew from.

pub mod config;
pub mod error;
pub mod generation;
pub mod index;
pub mod ingestion;
pub mod pipeline;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use pipeline::TutorPipeline;
pub use types::{
    document::{Chunk, DocumentMeta, Page},
    query::AskRequest,
    response::{Answer, Confidence, SourceRef},
};
