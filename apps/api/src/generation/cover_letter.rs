//! Cover Letter generation — free-form model text passed through unmodified.

use crate::generation::prompts::{COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// Generates a tailored cover letter from resume and JD text.
/// `language` is an ISO-style language name or code; the prompt upcases it.
pub async fn generate_cover_letter(
    llm: &LlmClient,
    cv_text: &str,
    job_desc: &str,
    language: &str,
) -> Result<String, LlmError> {
    let prompt = COVER_LETTER_PROMPT_TEMPLATE
        .replace("{language}", &language.to_uppercase())
        .replace("{cv_text}", cv_text)
        .replace("{job_desc}", job_desc);

    llm.call(&prompt, COVER_LETTER_SYSTEM).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_substitutes_all_placeholders() {
        let prompt = COVER_LETTER_PROMPT_TEMPLATE
            .replace("{language}", "EN")
            .replace("{cv_text}", "resume body")
            .replace("{job_desc}", "jd body");
        assert!(prompt.contains("resume body"));
        assert!(prompt.contains("jd body"));
        assert!(prompt.contains("cover letter in EN"));
        assert!(!prompt.contains('{'));
    }
}
