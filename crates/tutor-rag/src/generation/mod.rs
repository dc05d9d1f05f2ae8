//! Context assembly, prompt templates, and the Ollama client

mod context;
mod ollama;
mod prompt;

pub use context::{assemble, AssembledContext};
pub use ollama::OllamaClient;
pub use prompt::PromptBuilder;
