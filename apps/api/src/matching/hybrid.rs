//! Hybrid Aggregator — turns raw semantic matches into a full comparison.
//!
//! Partitions matches into exact and partial bands, derives missing and extra
//! skill sets, renders the human-readable report, and computes the aggregate
//! 0-100 score. The 0-100 scale is distinct from the literal comparator's
//! 0-1 scale; downstream display logic depends on both staying as they are.

use std::collections::HashSet;

use serde::Serialize;

use crate::embedding::{Embedder, EmbeddingError};
use crate::matching::round2;
use crate::matching::semantic::{semantic_matches, SkillMatch};

/// Rounded similarity at or above this counts as an exact match.
pub const EXACT_MATCH_THRESHOLD: f32 = 0.9;

/// Aggregate result of a hybrid comparison. `score` is in [0, 100].
#[derive(Debug, Clone, Serialize)]
pub struct HybridComparison {
    pub exact_matches: Vec<SkillMatch>,
    pub partial_matches: Vec<SkillMatch>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    pub formatted: String,
    pub score: f64,
}

/// Runs the semantic comparator and aggregates its matches.
///
/// - exact: rounded score >= 0.9; partial: [threshold, 0.9)
/// - `missing_skills`: job labels matched by no record, in job-list order
/// - `extra_skills`: cv labels that are the source of zero records, compared
///   by exact label identity, not normalized equality (asymmetric with the
///   literal comparator on purpose)
pub async fn hybrid_compare(
    embedder: &dyn Embedder,
    cv_skills: &[String],
    job_skills: &[String],
    threshold: f32,
) -> Result<HybridComparison, EmbeddingError> {
    let matches = semantic_matches(embedder, cv_skills, job_skills, threshold).await?;

    let mut matched_job_skills = HashSet::new();
    let mut exact_matches = Vec::new();
    let mut partial_matches = Vec::new();

    for skill_match in matches.iter() {
        matched_job_skills.insert(skill_match.job_skill.as_str());
        if skill_match.score >= EXACT_MATCH_THRESHOLD {
            exact_matches.push(skill_match.clone());
        } else {
            partial_matches.push(skill_match.clone());
        }
    }

    let missing_skills: Vec<String> = job_skills
        .iter()
        .filter(|skill| !matched_job_skills.contains(skill.as_str()))
        .cloned()
        .collect();

    let extra_skills: Vec<String> = cv_skills
        .iter()
        .filter(|skill| matches.iter().all(|m| m.cv_skill != **skill))
        .cloned()
        .collect();

    let formatted =
        format_hybrid_report(&exact_matches, &partial_matches, &missing_skills, &extra_skills);
    let score = hybrid_score(exact_matches.len(), partial_matches.len(), missing_skills.len());

    Ok(HybridComparison {
        exact_matches,
        partial_matches,
        missing_skills,
        extra_skills,
        formatted,
        score,
    })
}

/// 100 * matched / (matched + missing), rounded to 2 decimals; 0.0 when the
/// denominator is 0.
fn hybrid_score(exact: usize, partial: usize, missing: usize) -> f64 {
    let matched = exact + partial;
    let total_required = matched + missing;
    if total_required == 0 {
        return 0.0;
    }
    round2(matched as f64 / total_required as f64 * 100.0)
}

/// Sectioned markdown report: matched pairs (exact first) with similarity
/// percentages, then missing and extra sections only when non-empty.
fn format_hybrid_report(
    exact_matches: &[SkillMatch],
    partial_matches: &[SkillMatch],
    missing_skills: &[String],
    extra_skills: &[String],
) -> String {
    let mut report = String::from("### Matched Skills:\n");
    for skill_match in exact_matches.iter().chain(partial_matches) {
        let percent = skill_match.score as f64 * 100.0;
        report.push_str(&format!(
            "- **{}** matched with **{}** ({percent:.1}%)\n",
            skill_match.cv_skill, skill_match.job_skill
        ));
    }

    if !missing_skills.is_empty() {
        report.push_str("\n### Missing Skills from CV:\n");
        for skill in missing_skills {
            report.push_str(&format!("- {skill}\n"));
        }
    }

    if !extra_skills.is_empty() {
        report.push_str("\n### Extra Skills in CV:\n");
        for skill in extra_skills {
            report.push_str(&format!("- {skill}\n"));
        }
    }

    report
}
