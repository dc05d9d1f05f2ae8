//! Tutor server binary
//!
//! Run with: cargo run -p tutor-rag --bin tutor-rag-server

use tutor_rag::{config::RagConfig, server::TutorServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutor_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Config file is optional; defaults cover local development.
    let config = match std::env::var("TUTOR_RAG_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading configuration from {}", path);
            RagConfig::load(&path)?
        }
        Err(_) => RagConfig::default(),
    };

    tracing::info!("Configuration loaded");
    tracing::info!("  - Embedding model: {}", config.llm.embed_model);
    tracing::info!("  - Generation model: {}", config.llm.generate_model);
    tracing::info!("  - Top-k: {}", config.retrieval.top_k);
    tracing::info!("  - Min chunk length: {}", config.chunking.min_chunk_len);

    tracing::info!("Checking Ollama at {}...", config.llm.base_url);
    let client = reqwest::Client::new();
    match client
        .get(format!("{}/api/tags", config.llm.base_url))
        .send()
        .await
    {
        Ok(resp) if resp.status().is_success() => {
            tracing::info!("Ollama is running");
        }
        _ => {
            tracing::warn!("Ollama not available at {}", config.llm.base_url);
            tracing::warn!("Please start Ollama:");
            tracing::warn!("  1. Start: ollama serve");
            tracing::warn!(
                "  2. Pull models: ollama pull nomic-embed-text && ollama pull llama3"
            );
        }
    }

    let server = TutorServer::new(config)?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /api/upload-textbook - Upload a PDF textbook");
    println!("  POST /api/ask             - Ask a question");
    println!("  GET  /api/subjects        - List loaded subjects");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
