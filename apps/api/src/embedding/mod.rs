//! Embedding Provider — batch text embeddings and cosine similarity.
//!
//! The [`Embedder`] trait is the seam between the comparators and the
//! embedding backend. The production implementation calls the Ollama embed
//! API; tests inject deterministic in-memory doubles. The backend is
//! constructed once at startup and carried in `AppState` as
//! `Arc<dyn Embedder>` — there is no global model instance.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const EMBED_PATH: &str = "/api/embed";

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Backend returned {got} embeddings for a batch of {expected}")]
    BatchShape { expected: usize, got: usize },
}

/// Batch embedding backend.
///
/// Implementations must return exactly one vector per input text, in input
/// order. A failed call is surfaced as an error — never as a partial batch.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

/// Ollama-backed embedder. One HTTP call per batch; no retries — a failed
/// embedding call fails the whole comparison request.
#[derive(Clone)]
pub struct OllamaEmbedder {
    client: Client,
    embed_url: String,
    model: String,
}

impl OllamaEmbedder {
    pub fn new(base_url: &str, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            embed_url: format!("{base_url}{EMBED_PATH}"),
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Embedder for OllamaEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let response = self
            .client
            .post(&self.embed_url)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: EmbedResponse = response.json().await?;

        if parsed.embeddings.len() != texts.len() {
            return Err(EmbeddingError::BatchShape {
                expected: texts.len(),
                got: parsed.embeddings.len(),
            });
        }

        debug!(
            "Embedded batch of {} texts ({} dims)",
            texts.len(),
            parsed.embeddings.first().map(|v| v.len()).unwrap_or(0)
        );

        Ok(parsed.embeddings)
    }
}

/// Compute cosine similarity between two embedding vectors.
///
/// Returns a value in `[-1.0, 1.0]`. Returns `0.0` for empty vectors,
/// vectors of different lengths, or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < f32::EPSILON {
        return 0.0;
    }

    dot / denom
}

/// Deterministic in-memory embedders for unit tests.
#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed vector per known text and counts backend calls, so
    /// tests can assert that degenerate inputs never reach the backend.
    pub struct StaticEmbedder {
        vectors: HashMap<String, Vec<f32>>,
        calls: AtomicUsize,
    }

    impl StaticEmbedder {
        pub fn new(entries: &[(&str, Vec<f32>)]) -> Self {
            Self {
                vectors: entries
                    .iter()
                    .map(|(text, v)| (text.to_string(), v.clone()))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Embedder for StaticEmbedder {
        async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(texts
                .iter()
                .map(|t| {
                    self.vectors
                        .get(t)
                        .cloned()
                        .unwrap_or_else(|| panic!("no test vector registered for {t:?}"))
                })
                .collect())
        }
    }

    /// Always fails, for error-propagation tests.
    pub struct FailingEmbedder;

    #[async_trait]
    impl Embedder for FailingEmbedder {
        async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            Err(EmbeddingError::Api {
                status: 503,
                message: "backend down".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical() {
        let v = vec![1.0, 2.0, 3.0];
        let sim = cosine_similarity(&v, &v);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_opposite() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_empty_is_zero() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_cosine_length_mismatch_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_cosine_zero_magnitude_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
