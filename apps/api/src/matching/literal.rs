//! Literal Comparator — normalized exact matching of two skill lists.
//!
//! Two labels name the same skill iff their normalized forms are equal.
//! Display always uses original spellings: job-list spelling for
//! matched/missing, cv-list spelling for extras.

use std::collections::HashSet;

use serde::Serialize;

use crate::matching::round2;

/// Normalizes a skill label for literal comparison: lowercase, with all
/// whitespace, underscores, hyphens, and periods removed.
pub fn normalize_skill(skill: &str) -> String {
    skill
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '_' | '-' | '.'))
        .collect()
}

/// Result of a literal comparison.
///
/// `cv_skills` / `job_skills` are the input lists after duplicate collapse
/// (first-seen spelling wins), in input order. `score` is in [0, 1].
#[derive(Debug, Clone, Serialize)]
pub struct LiteralComparison {
    pub cv_skills: Vec<String>,
    pub job_skills: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub extra_in_cv: Vec<String>,
    pub score: f64,
}

/// Compares two skill lists by normalized literal equality.
///
/// Score = |matched| / (|matched| + |missing|), rounded to 2 decimals, and
/// 0.0 when the job list is empty. The zero-denominator case deliberately
/// conflates "no requirements" with "zero match".
pub fn compare_literal(cv_skills: &[String], job_skills: &[String]) -> LiteralComparison {
    let cv_entries = normalized_entries(cv_skills);
    let job_entries = normalized_entries(job_skills);

    let cv_forms: HashSet<&str> = cv_entries.iter().map(|(n, _)| n.as_str()).collect();
    let job_forms: HashSet<&str> = job_entries.iter().map(|(n, _)| n.as_str()).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for (form, original) in &job_entries {
        if cv_forms.contains(form.as_str()) {
            matched.push(original.clone());
        } else {
            missing.push(original.clone());
        }
    }

    let extra_in_cv: Vec<String> = cv_entries
        .iter()
        .filter(|(form, _)| !job_forms.contains(form.as_str()))
        .map(|(_, original)| original.clone())
        .collect();

    let total_required = matched.len() + missing.len();
    let score = if total_required == 0 {
        0.0
    } else {
        round2(matched.len() as f64 / total_required as f64)
    };

    LiteralComparison {
        cv_skills: cv_entries.into_iter().map(|(_, s)| s).collect(),
        job_skills: job_entries.into_iter().map(|(_, s)| s).collect(),
        matched,
        missing,
        extra_in_cv,
        score,
    }
}

/// Maps each distinct normalized form to its first-seen original spelling,
/// preserving input order.
fn normalized_entries(skills: &[String]) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for skill in skills {
        let form = normalize_skill(skill);
        if seen.insert(form.clone()) {
            entries.push((form, skill.clone()));
        }
    }
    entries
}

/// Renders a literal comparison as a plain-text report with per-section counts.
pub fn format_literal_report(comparison: &LiteralComparison) -> String {
    fn section(skills: &[String]) -> String {
        if skills.is_empty() {
            "None".to_string()
        } else {
            skills.join(", ")
        }
    }

    format!(
        "Matched Skills ({}):\n{}\n\nMissing Skills from CV ({}):\n{}\n\nExtra Skills in CV ({}):\n{}",
        comparison.matched.len(),
        section(&comparison.matched),
        comparison.missing.len(),
        section(&comparison.missing),
        comparison.extra_in_cv.len(),
        section(&comparison.extra_in_cv),
    )
}
