//! Answer and diagnostic response types

use serde::{Deserialize, Serialize};

/// Coarse label summarizing retrieval result sufficiency. Not a
/// probability: `None` means nothing was retrieved, `High` means at least
/// two chunks grounded the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    None,
    Medium,
    High,
}

impl Confidence {
    /// Documented threshold rule: none iff zero results, high iff two or
    /// more, medium otherwise.
    pub fn from_result_count(count: usize) -> Self {
        match count {
            0 => Self::None,
            1 => Self::Medium,
            _ => Self::High,
        }
    }
}

/// Citation back to a retrieved chunk, aligned positionally with the
/// context blocks handed to the generation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRef {
    /// Textbook title
    pub title: String,
    /// Page number, 1-based
    pub page: u32,
    /// Retrieval rank, 1 = most relevant
    pub rank: usize,
}

/// Grounded answer with page-level citations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Generated answer text
    pub answer: String,
    /// Citations in rank order; always one per retrieved chunk
    pub sources: Vec<SourceRef>,
    /// Retrieval sufficiency label
    pub confidence: Confidence,
}

/// Result of ingesting one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestSummary {
    /// Number of chunks that cleared filtering and were indexed
    pub chunks_processed: usize,
    /// Number of extracted pages
    pub total_pages: usize,
}

/// System health signal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Service status label
    pub status: String,
    /// Total chunks currently indexed
    pub chunks_indexed: usize,
}

impl Health {
    /// A healthy report with the given chunk count
    pub fn healthy(chunks_indexed: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            chunks_indexed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_threshold_rule() {
        assert_eq!(Confidence::from_result_count(0), Confidence::None);
        assert_eq!(Confidence::from_result_count(1), Confidence::Medium);
        assert_eq!(Confidence::from_result_count(2), Confidence::High);
        assert_eq!(Confidence::from_result_count(5), Confidence::High);
    }

    #[test]
    fn health_reports_status_and_count() {
        let health = Health::healthy(42);
        assert_eq!(health.status, "healthy");
        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["chunks_indexed"], 42);
    }

    #[test]
    fn confidence_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Confidence::None).unwrap(),
            "\"none\""
        );
        assert_eq!(
            serde_json::to_string(&Confidence::High).unwrap(),
            "\"high\""
        );
    }
}
