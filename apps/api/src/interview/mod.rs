// Mock Interview services: question generation, answer validity gating,
// and answer evaluation. LLM calls go through llm_client; the validity
// checker takes the injected embedding backend.

pub mod evaluation;
pub mod handlers;
pub mod prompts;
pub mod questions;
pub mod validity;
