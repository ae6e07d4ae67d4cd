//! Skill Extraction — pulls skill-label lists out of unstructured text.
//!
//! The model is asked for a one-line JSON array; `LlmClient::call_list`
//! tolerates surrounding prose and deduplicates the entries. Semantic
//! correctness of the extracted labels is not validated here, only that the
//! output is a list of strings.

use crate::generation::prompts::{
    CV_SKILLS_JOB_CONTEXT_TEMPLATE, CV_SKILLS_PROMPT_TEMPLATE, CV_SKILLS_SYSTEM,
    JOB_SKILLS_PROMPT_TEMPLATE, JOB_SKILLS_SYSTEM,
};
use crate::llm_client::prompts::LIST_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

/// Extracts hard skills from resume text. When `job_desc` is given, the
/// prompt asks the model to standardize skill naming to the JD's wording so
/// downstream comparison sees consistent labels.
pub async fn extract_cv_skills(
    llm: &LlmClient,
    cv_text: &str,
    job_desc: Option<&str>,
) -> Result<Vec<String>, LlmError> {
    let mut prompt = CV_SKILLS_PROMPT_TEMPLATE.replace("{cv_text}", cv_text);
    if let Some(job_desc) = job_desc {
        prompt.push_str(&CV_SKILLS_JOB_CONTEXT_TEMPLATE.replace("{job_desc}", job_desc));
    }
    let system = format!("{CV_SKILLS_SYSTEM} {LIST_ONLY_SYSTEM}");
    llm.call_list(&prompt, &system).await
}

/// Extracts hard skills from a job description. JD wording is the reference
/// naming format for comparison.
pub async fn extract_job_skills(llm: &LlmClient, job_desc: &str) -> Result<Vec<String>, LlmError> {
    let prompt = JOB_SKILLS_PROMPT_TEMPLATE.replace("{job_desc}", job_desc);
    let system = format!("{JOB_SKILLS_SYSTEM} {LIST_ONLY_SYSTEM}");
    llm.call_list(&prompt, &system).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_prompt_includes_resume_text() {
        let prompt = CV_SKILLS_PROMPT_TEMPLATE.replace("{cv_text}", "worked with Rust and Kafka");
        assert!(prompt.contains("worked with Rust and Kafka"));
        assert!(!prompt.contains("{cv_text}"));
    }

    #[test]
    fn test_job_context_template_includes_jd() {
        let context = CV_SKILLS_JOB_CONTEXT_TEMPLATE.replace("{job_desc}", "Senior Rust Engineer");
        assert!(context.contains("Senior Rust Engineer"));
        assert!(context.contains("standardize skill names"));
    }

    #[test]
    fn test_job_prompt_includes_jd_text() {
        let prompt = JOB_SKILLS_PROMPT_TEMPLATE.replace("{job_desc}", "must know Terraform");
        assert!(prompt.contains("must know Terraform"));
        assert!(!prompt.contains("{job_desc}"));
    }
}
