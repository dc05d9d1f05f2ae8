//! Question request types

use serde::{Deserialize, Serialize};

/// A student question, scoped to a subject. Transient, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// Subject to retrieve from
    pub subject: String,

    /// The question to answer
    pub question: String,

    /// Grade level of the student (informational, not used for filtering)
    #[serde(default = "default_grade_level")]
    pub grade_level: u8,

    /// Number of chunks to retrieve (default: 3)
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_grade_level() -> u8 {
    9
}

fn default_top_k() -> usize {
    3
}

impl AskRequest {
    /// Create a request with default grade level and result count
    pub fn new(subject: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            question: question.into(),
            grade_level: default_grade_level(),
            top_k: default_top_k(),
        }
    }

    /// Set the number of results to retrieve
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }
}
