//! Interview answer evaluation.
//!
//! Each answer passes through the validity gate before the transcript is
//! assembled; answers that fail the gate reach the evaluator as an explicit
//! sentinel so the model scores them 0 instead of guessing at intent.

use crate::embedding::{Embedder, EmbeddingError};
use crate::errors::AppError;
use crate::interview::prompts::{EVALUATION_PROMPT_TEMPLATE, EVALUATION_SYSTEM};
use crate::interview::validity::{is_valid_answer, DEFAULT_ANSWER_THRESHOLD};
use crate::llm_client::LlmClient;

const INVALID_ANSWER_SENTINEL: &str = "No valid answer was provided.";

/// Evaluates a full set of interview answers and returns free-form feedback
/// text with per-question scores and a final hiring recommendation.
///
/// Callers must pass `questions` and `answers` of equal length.
pub async fn evaluate_answers(
    llm: &LlmClient,
    embedder: &dyn Embedder,
    cv_text: &str,
    job_title: &str,
    questions: &[String],
    answers: &[String],
    language: &str,
) -> Result<String, AppError> {
    let qa_block = build_qa_block(embedder, questions, answers)
        .await
        .map_err(|e| AppError::Embedding(format!("Answer validity check failed: {e}")))?;

    let prompt = EVALUATION_PROMPT_TEMPLATE
        .replace("{cv_text}", cv_text)
        .replace("{job_title}", job_title)
        .replace("{qa_block}", &qa_block)
        .replace("{language}", &language.to_uppercase());

    llm.call(&prompt, EVALUATION_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Interview evaluation failed: {e}")))
}

/// Builds the Q/A transcript block, replacing answers that fail the validity
/// gate with [`INVALID_ANSWER_SENTINEL`].
async fn build_qa_block(
    embedder: &dyn Embedder,
    questions: &[String],
    answers: &[String],
) -> Result<String, EmbeddingError> {
    let mut block = String::new();
    for (index, (question, answer)) in questions.iter().zip(answers).enumerate() {
        let validity =
            is_valid_answer(embedder, question, answer, DEFAULT_ANSWER_THRESHOLD).await?;
        let shown = if validity.is_valid {
            answer.as_str()
        } else {
            INVALID_ANSWER_SENTINEL
        };
        let n = index + 1;
        block.push_str(&format!("Q{n}: {question}\nA{n}: {shown}\n"));
    }
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::testing::StaticEmbedder;

    fn texts(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_invalid_answers_replaced_with_sentinel() {
        let question = "What is polymorphism?";
        let good_answer = "Polymorphism lets one interface represent many underlying types";
        let embedder = StaticEmbedder::new(&[
            (question, vec![1.0, 0.0]),
            (good_answer, vec![0.8, 0.6]),
        ]);

        let block = build_qa_block(
            &embedder,
            &texts(&[question, question]),
            &texts(&[good_answer, "k"]),
        )
        .await
        .unwrap();

        assert!(block.contains(&format!("A1: {good_answer}")));
        assert!(block.contains("A2: No valid answer was provided."));
        // The short answer never reached the backend
        assert_eq!(embedder.call_count(), 1);
    }

    #[tokio::test]
    async fn test_qa_block_numbers_pairs_in_order() {
        let q1 = "Why Rust for this service?";
        let q2 = "Describe a production incident you handled.";
        let a1 = "Rust gives us memory safety without garbage collection pauses";
        let a2 = "A cascading retry storm took down our ingestion pipeline once";
        let embedder = StaticEmbedder::new(&[
            (q1, vec![1.0, 0.0]),
            (q2, vec![1.0, 0.0]),
            (a1, vec![0.9, 0.435_889_9]),
            (a2, vec![0.9, 0.435_889_9]),
        ]);

        let block = build_qa_block(&embedder, &texts(&[q1, q2]), &texts(&[a1, a2]))
            .await
            .unwrap();

        let expected = format!("Q1: {q1}\nA1: {a1}\nQ2: {q2}\nA2: {a2}\n");
        assert_eq!(block, expected);
    }
}
