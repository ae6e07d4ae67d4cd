pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::generation::handlers as generation;
use crate::interview::handlers as interview;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skill Matching API
        .route(
            "/api/v1/skills/compare",
            post(matching::handle_compare_skills),
        )
        .route(
            "/api/v1/skills/analyze",
            post(matching::handle_analyze_skills),
        )
        // Generation API
        .route("/api/v1/cover-letter", post(generation::handle_cover_letter))
        .route("/api/v1/cv/evaluate", post(generation::handle_evaluate_cv))
        // Mock Interview API
        .route(
            "/api/v1/interview/questions",
            post(interview::handle_generate_questions),
        )
        .route(
            "/api/v1/interview/evaluate",
            post(interview::handle_evaluate_answers),
        )
        .with_state(state)
}
