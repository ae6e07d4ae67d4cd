//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::cover_letter::generate_cover_letter;
use crate::generation::evaluation::{evaluate_cv, CvEvaluation};
use crate::state::AppState;

const DEFAULT_LANGUAGE: &str = "en";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub cv_text: String,
    pub job_desc: String,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateCvRequest {
    pub cv_text: String,
    pub job_title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateCvResponse {
    pub evaluation: CvEvaluation,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/cover-letter
///
/// Generates a tailored cover letter from resume and JD text.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if request.cv_text.trim().is_empty() {
        return Err(AppError::Validation("cv_text cannot be empty".to_string()));
    }
    if request.job_desc.trim().is_empty() {
        return Err(AppError::Validation("job_desc cannot be empty".to_string()));
    }

    let language = request.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    let cover_letter = generate_cover_letter(&state.llm, &request.cv_text, &request.job_desc, language)
        .await
        .map_err(|e| AppError::Llm(format!("Cover letter generation failed: {e}")))?;

    Ok(Json(CoverLetterResponse { cover_letter }))
}

/// POST /api/v1/cv/evaluate
///
/// Returns a structured evaluation of the resume, optionally against a
/// target job title. Schema violations from the model are LLM errors, not
/// silently degraded results.
pub async fn handle_evaluate_cv(
    State(state): State<AppState>,
    Json(request): Json<EvaluateCvRequest>,
) -> Result<Json<EvaluateCvResponse>, AppError> {
    if request.cv_text.trim().is_empty() {
        return Err(AppError::Validation("cv_text cannot be empty".to_string()));
    }

    let evaluation = evaluate_cv(&state.llm, &request.cv_text, request.job_title.as_deref())
        .await
        .map_err(|e| AppError::Llm(format!("CV evaluation failed: {e}")))?;

    Ok(Json(EvaluateCvResponse { evaluation }))
}
