//! Axum route handlers for the Skill Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::extraction::{extract_cv_skills, extract_job_skills};
use crate::llm_client::LlmError;
use crate::matching::hybrid::{hybrid_compare, HybridComparison};
use crate::matching::literal::{compare_literal, format_literal_report, LiteralComparison};
use crate::matching::semantic::DEFAULT_MATCH_THRESHOLD;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CompareSkillsRequest {
    pub cv_skills: Vec<String>,
    pub job_skills: Vec<String>,
    pub threshold: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct CompareSkillsResponse {
    pub literal: LiteralComparison,
    /// Plain-text rendering of the literal comparison.
    pub literal_report: String,
    pub hybrid: HybridComparison,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeSkillsRequest {
    pub cv_text: String,
    pub job_desc: String,
    pub threshold: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeSkillsResponse {
    /// Skills the model extracted from the resume.
    pub cv_skills: Vec<String>,
    /// Skills the model extracted from the job description.
    pub job_skills: Vec<String>,
    pub literal: LiteralComparison,
    pub literal_report: String,
    pub hybrid: HybridComparison,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/compare
///
/// Runs the literal and hybrid comparators over two already-extracted skill
/// lists. Empty lists are valid input (both scores are defined as 0 when the
/// job list is empty).
pub async fn handle_compare_skills(
    State(state): State<AppState>,
    Json(request): Json<CompareSkillsRequest>,
) -> Result<Json<CompareSkillsResponse>, AppError> {
    let threshold = resolve_threshold(request.threshold)?;

    let literal = compare_literal(&request.cv_skills, &request.job_skills);
    let literal_report = format_literal_report(&literal);

    let hybrid = hybrid_compare(
        state.embedder.as_ref(),
        &request.cv_skills,
        &request.job_skills,
        threshold,
    )
    .await
    .map_err(|e| AppError::Embedding(format!("Hybrid comparison failed: {e}")))?;

    Ok(Json(CompareSkillsResponse {
        literal,
        literal_report,
        hybrid,
    }))
}

/// POST /api/v1/skills/analyze
///
/// Full analysis pipeline: LLM skill extraction for both texts, then literal
/// and hybrid comparison. Malformed extraction output degrades to an empty
/// list for that side (logged); backend failures abort the request.
pub async fn handle_analyze_skills(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeSkillsRequest>,
) -> Result<Json<AnalyzeSkillsResponse>, AppError> {
    if request.cv_text.trim().is_empty() {
        return Err(AppError::Validation("cv_text cannot be empty".to_string()));
    }
    if request.job_desc.trim().is_empty() {
        return Err(AppError::Validation("job_desc cannot be empty".to_string()));
    }
    let threshold = resolve_threshold(request.threshold)?;

    let cv_skills = extracted_or_empty(
        extract_cv_skills(&state.llm, &request.cv_text, Some(&request.job_desc)).await,
        "cv",
    )?;
    let job_skills = extracted_or_empty(
        extract_job_skills(&state.llm, &request.job_desc).await,
        "job",
    )?;
    info!(
        "Extracted {} cv skills and {} job skills",
        cv_skills.len(),
        job_skills.len()
    );

    let literal = compare_literal(&cv_skills, &job_skills);
    let literal_report = format_literal_report(&literal);

    let hybrid = hybrid_compare(state.embedder.as_ref(), &cv_skills, &job_skills, threshold)
        .await
        .map_err(|e| AppError::Embedding(format!("Hybrid comparison failed: {e}")))?;

    Ok(Json(AnalyzeSkillsResponse {
        cv_skills,
        job_skills,
        literal,
        literal_report,
        hybrid,
    }))
}

/// Validates an optional caller threshold, falling back to the default.
fn resolve_threshold(threshold: Option<f32>) -> Result<f32, AppError> {
    let threshold = threshold.unwrap_or(DEFAULT_MATCH_THRESHOLD);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(AppError::Validation(format!(
            "threshold must be within [0.0, 1.0], got {threshold}"
        )));
    }
    Ok(threshold)
}

/// Malformed model output (no list, wrong shape) is recoverable here: the
/// comparison proceeds with an empty list for that side. Transport and
/// backend failures are not.
fn extracted_or_empty(
    result: Result<Vec<String>, LlmError>,
    side: &str,
) -> Result<Vec<String>, AppError> {
    match result {
        Ok(skills) => Ok(skills),
        Err(e @ (LlmError::MissingStructure(_) | LlmError::Parse(_))) => {
            warn!("Skill extraction returned malformed output for {side} side: {e}");
            Ok(Vec::new())
        }
        Err(e) => Err(AppError::Llm(format!("Skill extraction failed: {e}"))),
    }
}
