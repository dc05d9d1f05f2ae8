//! Core data types for documents, queries, and answers

pub mod document;
pub mod query;
pub mod response;

pub use document::{Chunk, DocumentMeta, Page};
pub use query::AskRequest;
pub use response::{Answer, Confidence, Health, IngestSummary, SourceRef};

/// Canonical form of a subject string, used as the partition key for
/// retrieval. Subjects arrive as free text ("Math", " math "), so both
/// ingestion and querying compare this normalized form.
pub fn subject_key(subject: &str) -> String {
    subject.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_key_trims_and_folds_case() {
        assert_eq!(subject_key("Mathematics"), "mathematics");
        assert_eq!(subject_key("  math  "), "math");
        assert_eq!(subject_key("Math"), subject_key("math"));
    }
}
