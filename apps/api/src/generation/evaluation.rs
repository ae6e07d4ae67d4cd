//! CV Evaluation — structured resume feedback from the LLM.
//!
//! The model's JSON is serde-validated into [`CvEvaluation`]; a schema
//! violation surfaces as a tagged `LlmError` rather than a loosely-typed
//! error object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::generation::prompts::{CV_EVALUATION_PROMPT_TEMPLATE, CV_EVALUATION_SYSTEM};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

/// Per-dimension commentary on the resume as a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationDetail {
    pub structure: String,
    pub clarity: String,
    pub language_quality: String,
    pub length: String,
    pub consistency: String,
}

/// Full structured evaluation of a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvEvaluation {
    /// Score between 0.0 and 10.0.
    pub overall_rating: f64,
    pub summary: String,
    pub fit_for_role: String,
    pub evaluation: EvaluationDetail,
    /// Section name (Header, Education, Experience, ...) to feedback.
    pub section_feedback: BTreeMap<String, String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Evaluates a resume, optionally against a target job title.
pub async fn evaluate_cv(
    llm: &LlmClient,
    cv_text: &str,
    job_title: Option<&str>,
) -> Result<CvEvaluation, LlmError> {
    let job_title_line = match job_title {
        Some(title) => format!("Target Job Title: {title}\n\n"),
        None => String::new(),
    };
    let prompt = CV_EVALUATION_PROMPT_TEMPLATE
        .replace("{job_title_line}", &job_title_line)
        .replace("{cv_text}", cv_text);

    let system = format!("{CV_EVALUATION_SYSTEM} {JSON_ONLY_SYSTEM}");
    llm.call_json::<CvEvaluation>(&prompt, &system).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_json_object;

    const EVALUATION_FIXTURE: &str = r#"{
        "overall_rating": 7.5,
        "summary": "Solid resume with strong technical depth.",
        "fit_for_role": "Good alignment with backend engineering roles.",
        "evaluation": {
            "structure": "Clear sections in logical order.",
            "clarity": "Concise and direct.",
            "language_quality": "Professional tone throughout.",
            "length": "Appropriate at one page.",
            "consistency": "Formatting is uniform."
        },
        "section_feedback": {
            "Header": "Complete contact info.",
            "Experience": "Good use of metrics.",
            "Skills": "Relevant and specific."
        },
        "strengths": ["Quantified impact", "Modern stack"],
        "weaknesses": ["No open-source links"],
        "recommendations": ["Add a projects section"]
    }"#;

    #[test]
    fn test_evaluation_fixture_deserializes() {
        let evaluation: CvEvaluation = parse_json_object(EVALUATION_FIXTURE).unwrap();
        assert!((evaluation.overall_rating - 7.5).abs() < f64::EPSILON);
        assert_eq!(evaluation.strengths.len(), 2);
        assert_eq!(
            evaluation.section_feedback.get("Skills").unwrap(),
            "Relevant and specific."
        );
        assert_eq!(evaluation.evaluation.length, "Appropriate at one page.");
    }

    #[test]
    fn test_evaluation_wrapped_in_prose_still_parses() {
        let wrapped = format!("Here is my evaluation:\n{EVALUATION_FIXTURE}\nGood luck!");
        let evaluation: CvEvaluation = parse_json_object(&wrapped).unwrap();
        assert_eq!(evaluation.weaknesses, vec!["No open-source links"]);
    }

    #[test]
    fn test_missing_required_key_is_schema_error() {
        let err = parse_json_object::<CvEvaluation>(r#"{"overall_rating": 5.0}"#).unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[test]
    fn test_job_title_line_substitution() {
        let prompt = CV_EVALUATION_PROMPT_TEMPLATE
            .replace("{job_title_line}", "Target Job Title: ML Engineer\n\n")
            .replace("{cv_text}", "resume");
        assert!(prompt.starts_with("Target Job Title: ML Engineer"));
    }
}
