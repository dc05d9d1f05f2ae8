//! Textbook upload endpoint

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::DocumentMeta;

/// Response for a successful textbook upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub subject: String,
    pub chunks_processed: usize,
    pub total_pages: usize,
}

/// POST /api/upload-textbook - Upload a PDF textbook for one subject
pub async fn upload_textbook(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut title: Option<String> = None;
    let mut subject: Option<String> = None;
    let mut grade_level: u8 = 9;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Config(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| Error::Config(format!("Failed to read file: {}", e)))?;
                file = Some((filename, data.to_vec()));
            }
            "title" => title = Some(read_text_field(field).await?),
            "subject" => subject = Some(read_text_field(field).await?),
            "grade_level" => {
                let raw = read_text_field(field).await?;
                grade_level = raw
                    .trim()
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid grade_level: '{}'", raw)))?;
            }
            other => {
                tracing::debug!("Ignoring unknown multipart field: {}", other);
            }
        }
    }

    let (filename, data) =
        file.ok_or_else(|| Error::Config("Missing 'file' field".to_string()))?;
    let subject =
        subject.ok_or_else(|| Error::Config("Missing 'subject' field".to_string()))?;

    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(Error::extraction(&filename, "Only PDF files accepted"));
    }

    // Title defaults to the filename without its extension.
    let title = title.unwrap_or_else(|| {
        filename
            .strip_suffix(".pdf")
            .or_else(|| filename.strip_suffix(".PDF"))
            .unwrap_or(&filename)
            .to_string()
    });

    tracing::info!(
        file = %filename,
        subject = %subject,
        bytes = data.len(),
        "processing textbook upload"
    );

    // PDF extraction is CPU-bound; keep it off the async workers.
    let pages = {
        let state = state.clone();
        let filename = filename.clone();
        tokio::task::spawn_blocking(move || state.extractor().extract(&filename, &data))
            .await
            .map_err(|e| Error::Config(format!("Extraction task failed: {}", e)))??
    };

    let meta = DocumentMeta::new(title, &subject, grade_level);
    let summary = state.pipeline().ingest(&meta, &pages).await?;

    Ok(Json(UploadResponse {
        message: format!("Textbook '{}' uploaded successfully", meta.title),
        subject: meta.subject,
        chunks_processed: summary.chunks_processed,
        total_pages: summary.total_pages,
    }))
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| Error::Config(format!("Failed to read form field: {}", e)))
}
