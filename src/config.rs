//! Configuration management for the research agent.
//!
//! Configuration can be set via environment variables:
//! - `OPENROUTER_API_KEY` - Required. API key for the LLM backend.
//! - `TAVILY_API_KEY` - Required. API key for the web search backend.
//! - `RESEARCH_MODEL` - Optional. The LLM model to use (OpenRouter format).
//! - `MAX_RESEARCH_ITERATIONS` - Optional. Cap on researcher invocations per run. Defaults to `3`.
//! - `SEARCH_MAX_RESULTS` - Optional. Maximum search results per query. Defaults to `5`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the LLM backend (OpenRouter)
    pub model_api_key: String,

    /// API key for the web search backend (Tavily)
    pub search_api_key: String,

    /// LLM model identifier (OpenRouter format)
    pub model: String,

    /// Cap on researcher invocations per run
    pub max_iterations: u32,

    /// Maximum number of results requested per search query
    pub search_max_results: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `OPENROUTER_API_KEY` or
    /// `TAVILY_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let model_api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()))?;

        let search_api_key = std::env::var("TAVILY_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("TAVILY_API_KEY".to_string()))?;

        let model = std::env::var("RESEARCH_MODEL")
            .unwrap_or_else(|_| "meta-llama/llama-3.1-405b-instruct".to_string());

        let max_iterations = std::env::var("MAX_RESEARCH_ITERATIONS")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("MAX_RESEARCH_ITERATIONS".to_string(), format!("{}", e))
            })?;

        let search_max_results = std::env::var("SEARCH_MAX_RESULTS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("SEARCH_MAX_RESULTS".to_string(), format!("{}", e))
            })?;

        Ok(Self {
            model_api_key,
            search_api_key,
            model,
            max_iterations,
            search_max_results,
        })
    }

    /// Create a config with custom keys and default limits (useful for testing).
    pub fn new(model_api_key: String, search_api_key: String) -> Self {
        Self {
            model_api_key,
            search_api_key,
            model: "meta-llama/llama-3.1-405b-instruct".to_string(),
            max_iterations: 3,
            search_max_results: 5,
        }
    }
}
