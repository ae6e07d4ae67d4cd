//! Semantic Comparator — pairwise embedding similarity between two skill lists.
//!
//! Emits every (cv, job) pair whose cosine similarity reaches the threshold.
//! There is no bipartite uniqueness constraint: one cv label may match several
//! job labels and vice versa, so the aggregator sees all plausible matches.

use serde::{Deserialize, Serialize};

use crate::embedding::{cosine_similarity, Embedder, EmbeddingError};
use crate::matching::round2;

/// Default similarity threshold for a pair to count as a match.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.5;

/// A single semantically matched skill pair. Immutable once created;
/// `score` is the cosine similarity rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub cv_skill: String,
    pub job_skill: String,
    pub score: f32,
}

/// Computes all semantic matches between `cv_skills` and `job_skills` with
/// similarity at or above `threshold`.
///
/// If either list is empty the result is empty and the embedding backend is
/// never called. Otherwise each side is embedded in one batch and the full
/// pairwise similarity matrix is evaluated. Backend failure propagates as an
/// error; the degenerate empty-list case is the only empty-result shortcut.
pub async fn semantic_matches(
    embedder: &dyn Embedder,
    cv_skills: &[String],
    job_skills: &[String],
    threshold: f32,
) -> Result<Vec<SkillMatch>, EmbeddingError> {
    if cv_skills.is_empty() || job_skills.is_empty() {
        return Ok(Vec::new());
    }

    let cv_embeddings = embedder.embed_batch(cv_skills).await?;
    let job_embeddings = embedder.embed_batch(job_skills).await?;

    let mut matches = Vec::new();
    for (cv_skill, cv_embedding) in cv_skills.iter().zip(&cv_embeddings) {
        for (job_skill, job_embedding) in job_skills.iter().zip(&job_embeddings) {
            let similarity = cosine_similarity(cv_embedding, job_embedding);
            if similarity >= threshold {
                matches.push(SkillMatch {
                    cv_skill: cv_skill.clone(),
                    job_skill: job_skill.clone(),
                    score: round2(similarity as f64) as f32,
                });
            }
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::testing::{FailingEmbedder, StaticEmbedder};

    fn skills(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    /// Unit vectors at known angles to [1, 0]:
    /// cos = 0.95, 0.6, and 0.2 respectively.
    fn fixture_embedder() -> StaticEmbedder {
        StaticEmbedder::new(&[
            ("Jupyter Notebooks", vec![1.0, 0.0]),
            ("Jupyter", vec![0.95, 0.312_249_9]),
            ("Kubernetes", vec![0.6, 0.8]),
            ("Gardening", vec![0.2, 0.979_795_9]),
        ])
    }

    #[tokio::test]
    async fn test_empty_cv_list_skips_backend() {
        let embedder = fixture_embedder();
        let matches = semantic_matches(&embedder, &[], &skills(&["Jupyter"]), 0.5)
            .await
            .unwrap();
        assert!(matches.is_empty());
        assert_eq!(embedder.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_job_list_skips_backend() {
        let embedder = fixture_embedder();
        let matches = semantic_matches(&embedder, &skills(&["Jupyter"]), &[], 0.5)
            .await
            .unwrap();
        assert!(matches.is_empty());
        assert_eq!(embedder.call_count(), 0);
    }

    #[tokio::test]
    async fn test_one_batch_call_per_side() {
        let embedder = fixture_embedder();
        semantic_matches(
            &embedder,
            &skills(&["Jupyter Notebooks", "Kubernetes"]),
            &skills(&["Jupyter"]),
            0.5,
        )
        .await
        .unwrap();
        assert_eq!(embedder.call_count(), 2);
    }

    #[tokio::test]
    async fn test_threshold_filters_pairs() {
        let embedder = fixture_embedder();
        let matches = semantic_matches(
            &embedder,
            &skills(&["Jupyter Notebooks", "Gardening"]),
            &skills(&["Jupyter"]),
            0.5,
        )
        .await
        .unwrap();
        // Gardening vs Jupyter: cos ~= 0.496, just below the threshold
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].cv_skill, "Jupyter Notebooks");
        assert_eq!(matches[0].job_skill, "Jupyter");
        assert!((matches[0].score - 0.95).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_one_cv_skill_may_match_many_job_skills() {
        let embedder = fixture_embedder();
        let matches = semantic_matches(
            &embedder,
            &skills(&["Jupyter Notebooks"]),
            &skills(&["Jupyter", "Kubernetes"]),
            0.5,
        )
        .await
        .unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[tokio::test]
    async fn test_raising_threshold_never_adds_matches() {
        let cv = skills(&["Jupyter Notebooks", "Kubernetes"]);
        let job = skills(&["Jupyter", "Gardening"]);
        let mut previous = usize::MAX;
        for threshold in [0.1, 0.5, 0.7, 0.9, 0.99] {
            let embedder = fixture_embedder();
            let matches = semantic_matches(&embedder, &cv, &job, threshold)
                .await
                .unwrap();
            assert!(matches.len() <= previous);
            previous = matches.len();
        }
    }

    #[tokio::test]
    async fn test_scores_rounded_to_two_decimals() {
        let embedder = StaticEmbedder::new(&[
            ("A", vec![1.0, 0.0]),
            ("B", vec![0.333_333, 0.942_809]),
        ]);
        let matches = semantic_matches(&embedder, &skills(&["A"]), &skills(&["B"]), 0.3)
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert!((matches[0].score - 0.33).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let result = semantic_matches(
            &FailingEmbedder,
            &skills(&["Rust"]),
            &skills(&["Go"]),
            0.5,
        )
        .await;
        assert!(matches!(result, Err(EmbeddingError::Api { status: 503, .. })));
    }
}
