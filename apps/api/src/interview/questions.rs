//! Interview question generation and numbered-list parsing.

use crate::interview::prompts::{QUESTIONS_PROMPT_TEMPLATE, QUESTIONS_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// Generates role-specific mock interview questions from a resume and job
/// title. The model is asked for a numbered list; lines without a leading
/// index are dropped. An output with no parseable questions is a tagged
/// LLM error, not an empty success.
pub async fn generate_questions(
    llm: &LlmClient,
    cv_text: &str,
    job_title: &str,
    language: &str,
) -> Result<Vec<String>, LlmError> {
    let prompt = QUESTIONS_PROMPT_TEMPLATE
        .replace("{language}", &language.to_uppercase())
        .replace("{job_title}", job_title)
        .replace("{cv_text}", cv_text);

    let text = llm.call(&prompt, QUESTIONS_SYSTEM).await?;

    let questions = parse_numbered_list(&text);
    if questions.is_empty() {
        return Err(LlmError::MissingStructure("numbered question list"));
    }
    Ok(questions)
}

/// Parses `1. ...` / `2) ...` style lines, stripping the index prefix.
/// Lines without a leading index (headers, prose) are skipped.
pub fn parse_numbered_list(text: &str) -> Vec<String> {
    let mut items = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            continue;
        }
        let rest = line[digits..].trim_start();
        let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) else {
            continue;
        };
        let item = rest.trim();
        if !item.is_empty() {
            items.push(item.to_string());
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_dot_numbered_lines() {
        let text = "1. Tell me about yourself.\n2. Why Rust?\n3. Describe a hard bug.";
        assert_eq!(
            parse_numbered_list(text),
            vec![
                "Tell me about yourself.",
                "Why Rust?",
                "Describe a hard bug."
            ]
        );
    }

    #[test]
    fn test_parses_paren_numbered_lines() {
        let text = "1) First question?\n2) Second question?";
        assert_eq!(
            parse_numbered_list(text),
            vec!["First question?", "Second question?"]
        );
    }

    #[test]
    fn test_skips_headers_and_prose() {
        let text = "Here are your interview questions:\n\n1. What is ownership in Rust?\nGood luck!\n2. Explain lifetimes.";
        assert_eq!(
            parse_numbered_list(text),
            vec!["What is ownership in Rust?", "Explain lifetimes."]
        );
    }

    #[test]
    fn test_skips_empty_numbered_lines() {
        let text = "1.\n2. A real question?";
        assert_eq!(parse_numbered_list(text), vec!["A real question?"]);
    }

    #[test]
    fn test_double_digit_indices() {
        let text = "10. Tenth question?\n11. Eleventh question?";
        assert_eq!(
            parse_numbered_list(text),
            vec!["Tenth question?", "Eleventh question?"]
        );
    }

    #[test]
    fn test_no_numbered_lines_yields_empty() {
        assert!(parse_numbered_list("I cannot generate questions.").is_empty());
    }
}
