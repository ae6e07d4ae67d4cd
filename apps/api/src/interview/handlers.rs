//! Axum route handlers for the Mock Interview API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::evaluation::evaluate_answers;
use crate::interview::questions::generate_questions;
use crate::state::AppState;

const DEFAULT_LANGUAGE: &str = "en";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub cv_text: String,
    pub job_title: String,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateAnswersRequest {
    pub cv_text: String,
    pub job_title: String,
    pub questions: Vec<String>,
    pub answers: Vec<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateAnswersResponse {
    pub feedback: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/questions
///
/// Generates 10-12 numbered, role-specific interview questions.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    if request.cv_text.trim().is_empty() {
        return Err(AppError::Validation("cv_text cannot be empty".to_string()));
    }
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    let language = request.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    let questions = generate_questions(&state.llm, &request.cv_text, &request.job_title, language)
        .await
        .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;

    Ok(Json(GenerateQuestionsResponse { questions }))
}

/// POST /api/v1/interview/evaluate
///
/// Scores a completed mock interview. Answers that fail the validity gate
/// are evaluated as "no valid answer" rather than interpreted.
pub async fn handle_evaluate_answers(
    State(state): State<AppState>,
    Json(request): Json<EvaluateAnswersRequest>,
) -> Result<Json<EvaluateAnswersResponse>, AppError> {
    if request.cv_text.trim().is_empty() {
        return Err(AppError::Validation("cv_text cannot be empty".to_string()));
    }
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }
    if request.questions.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "questions cannot be empty".to_string(),
        ));
    }
    if request.questions.len() != request.answers.len() {
        return Err(AppError::UnprocessableEntity(format!(
            "got {} answers for {} questions",
            request.answers.len(),
            request.questions.len()
        )));
    }

    let language = request.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    let feedback = evaluate_answers(
        &state.llm,
        state.embedder.as_ref(),
        &request.cv_text,
        &request.job_title,
        &request.questions,
        &request.answers,
        language,
    )
    .await?;

    Ok(Json(EvaluateAnswersResponse { feedback }))
}
