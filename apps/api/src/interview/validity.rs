//! Answer Validity Checker — embedding-similarity gate for interview answers.
//!
//! A heuristic relevance gate, not a correctness judge: it decides whether a
//! free-text answer is substantive enough to be worth grading. False
//! positives and negatives are expected.

use serde::Serialize;

use crate::embedding::{cosine_similarity, Embedder, EmbeddingError};

/// Default similarity threshold for an answer to count as on-topic.
pub const DEFAULT_ANSWER_THRESHOLD: f32 = 0.3;

/// Answers with fewer whitespace-separated tokens than this are rejected
/// without an embedding call.
pub const MIN_ANSWER_TOKENS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnswerValidity {
    pub is_valid: bool,
    pub similarity: f32,
}

/// Measures the similarity between an answer and its question.
///
/// Empty/whitespace-only answers and answers shorter than
/// [`MIN_ANSWER_TOKENS`] tokens fast-reject as `(false, 0.0)` without
/// touching the embedding backend. Otherwise both texts are embedded in a
/// single batch and the answer is valid iff cosine similarity reaches the
/// threshold.
pub async fn is_valid_answer(
    embedder: &dyn Embedder,
    question: &str,
    answer: &str,
    threshold: f32,
) -> Result<AnswerValidity, EmbeddingError> {
    if answer.trim().is_empty() || answer.split_whitespace().count() < MIN_ANSWER_TOKENS {
        return Ok(AnswerValidity {
            is_valid: false,
            similarity: 0.0,
        });
    }

    let texts = [question.to_string(), answer.to_string()];
    let embeddings = embedder.embed_batch(&texts).await?;
    let similarity = cosine_similarity(&embeddings[0], &embeddings[1]);

    Ok(AnswerValidity {
        is_valid: similarity >= threshold,
        similarity,
    })
}
