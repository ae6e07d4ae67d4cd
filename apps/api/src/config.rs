use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every Ollama setting has a local default so the service starts against a
/// stock `ollama serve` on the same host.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Ollama server (no trailing slash).
    pub ollama_base_url: String,
    /// Model used for all generative calls (cover letters, extraction, feedback).
    pub generation_model: String,
    /// Model used for all embedding calls.
    pub embedding_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ollama_base_url: env_or("OLLAMA_BASE_URL", "http://localhost:11434")
                .trim_end_matches('/')
                .to_string(),
            generation_model: env_or("OLLAMA_GENERATION_MODEL", "mistral"),
            embedding_model: env_or("OLLAMA_EMBEDDING_MODEL", "nomic-embed-text"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
