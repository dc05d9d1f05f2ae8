//! Document and chunk types

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Metadata describing a logical textbook. A document exists only as the
/// set of chunks sharing its title and subject; there is no separate
/// storage entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Textbook title
    pub title: String,
    /// Subject the textbook belongs to
    pub subject: String,
    /// Target grade level
    pub grade_level: u8,
    /// Author, when known
    #[serde(default)]
    pub author: Option<String>,
}

impl DocumentMeta {
    /// Create metadata with the subject trimmed to its display form
    pub fn new(title: impl Into<String>, subject: impl Into<String>, grade_level: u8) -> Self {
        Self {
            title: title.into(),
            subject: subject.into().trim().to_string(),
            grade_level,
            author: None,
        }
    }
}

/// A single page of extracted text, as produced by a document extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number, 1-based
    pub page_number: u32,
    /// Raw extracted text of the page
    pub raw_text: String,
}

impl Page {
    pub fn new(page_number: u32, raw_text: impl Into<String>) -> Self {
        Self {
            page_number,
            raw_text: raw_text.into(),
        }
    }
}

/// Minimal retrievable unit of text with page and position provenance.
/// Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Content-addressed identifier, deterministic from
    /// (source_title, page_number, sequence_index)
    pub id: String,
    /// Trimmed paragraph text, never empty
    pub text: String,
    /// Title of the textbook this chunk came from
    pub source_title: String,
    /// Subject partition, trimmed display form
    pub subject: String,
    /// Grade level of the source textbook
    pub grade_level: u8,
    /// Page the paragraph appeared on, 1-based
    pub page_number: u32,
    /// Position of the paragraph within its page, 0-based
    pub sequence_index: u32,
    /// Character length of the trimmed text
    pub length: usize,
}

impl Chunk {
    /// Create a chunk from document metadata and a trimmed paragraph.
    /// The id is derived from the identity fields, so re-chunking the same
    /// document produces the same ids and re-ingestion stays idempotent.
    pub fn new(meta: &DocumentMeta, page_number: u32, sequence_index: u32, text: &str) -> Self {
        let text = text.trim();
        Self {
            id: chunk_id(&meta.title, page_number, sequence_index),
            text: text.to_string(),
            source_title: meta.title.clone(),
            subject: meta.subject.trim().to_string(),
            grade_level: meta.grade_level,
            page_number,
            sequence_index,
            length: text.chars().count(),
        }
    }
}

/// Deterministic chunk identifier: SHA-256 over the identity fields.
/// A unit separator keeps "ab" + page 1 distinct from "a" + page 11.
pub fn chunk_id(source_title: &str, page_number: u32, sequence_index: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source_title.as_bytes());
    hasher.update([0x1f]);
    hasher.update(page_number.to_le_bytes());
    hasher.update([0x1f]);
    hasher.update(sequence_index.to_le_bytes());
    hex::encode(hasher.finalize())
}
