use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Missing `GEMINI_API_KEY` aborts startup; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub resumes_dir: String,
    pub output_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            resumes_dir: std::env::var("RESUMES_DIR").unwrap_or_else(|_| "resumes".to_string()),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or_else(|_| ".".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
