// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-object-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt fragment that enforces one-line JSON-array-only output.
pub const LIST_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with a valid JSON array of strings on a single line. \
    Do NOT include any text outside the array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
