//! Document ingestion: text extraction and paragraph chunking

mod chunker;
mod extractor;

pub use chunker::ParagraphChunker;
pub use extractor::{DocumentExtractor, PdfExtractor};
