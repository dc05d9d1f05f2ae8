//! Question answering and subject listing endpoints

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{Answer, AskRequest};

/// POST /api/ask - Answer a question against one subject's textbooks
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<Answer>> {
    tracing::info!(
        subject = %request.subject,
        top_k = request.top_k,
        "answering question"
    );

    let answer = state
        .pipeline()
        .ask(&request.subject, &request.question, request.top_k)
        .await?;

    Ok(Json(answer))
}

/// Subjects with indexed material
#[derive(Debug, Serialize)]
pub struct SubjectsResponse {
    pub subjects: Vec<String>,
}

/// GET /api/subjects - List subjects that have at least one indexed chunk
pub async fn list_subjects(State(state): State<AppState>) -> Json<SubjectsResponse> {
    let subjects = state.pipeline().list_subjects().into_iter().collect();
    Json(SubjectsResponse { subjects })
}
