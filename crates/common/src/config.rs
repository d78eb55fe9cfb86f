use crate::error::TextPolishError;
use serde::{Deserialize, Serialize};

/// Default Gemini API endpoint
pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini model
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-1.0-pro";

/// Gemini backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key for the Generative Language API
    pub api_key: String,

    /// Model name (e.g., "gemini-1.0-pro")
    pub model: String,

    /// API base URL
    pub base_url: String,
}

impl GeminiConfig {
    /// Create config with an explicit API key and default model/endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: GEMINI_DEFAULT_MODEL.to_string(),
            base_url: GEMINI_DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Load configuration from environment variables and .env file
    ///
    /// `GEMINI_API_KEY` is required; `GEMINI_MODEL` and `GEMINI_BASE_URL`
    /// fall back to defaults.
    pub fn from_env() -> Result<Self, TextPolishError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| TextPolishError::config("GEMINI_API_KEY is not set"))?;

        let config = Self {
            api_key,
            model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| GEMINI_DEFAULT_MODEL.to_string()),
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| GEMINI_DEFAULT_BASE_URL.to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), TextPolishError> {
        if self.api_key.is_empty() {
            return Err(TextPolishError::config("Gemini API key cannot be empty"));
        }

        if self.model.is_empty() {
            return Err(TextPolishError::config("Gemini model name cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(TextPolishError::config(
                "Gemini base URL must start with http:// or https://",
            ));
        }

        Ok(())
    }
}

/// Phi-3 chat-completion backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phi3Config {
    /// Chat-completion endpoint URL
    pub api_url: String,

    /// Value sent as the Authorization header
    pub authorization: String,
}

impl Phi3Config {
    /// Create config with explicit endpoint and authorization value
    pub fn new(api_url: impl Into<String>, authorization: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            authorization: authorization.into(),
        }
    }

    /// Load configuration from environment variables and .env file
    ///
    /// Both `SHALE_API_URL` and `SHALE_API_AUTHORIZATION` are required.
    pub fn from_env() -> Result<Self, TextPolishError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let api_url = std::env::var("SHALE_API_URL")
            .map_err(|_| TextPolishError::config("SHALE_API_URL is not set"))?;
        let authorization = std::env::var("SHALE_API_AUTHORIZATION")
            .map_err(|_| TextPolishError::config("SHALE_API_AUTHORIZATION is not set"))?;

        let config = Self {
            api_url,
            authorization,
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), TextPolishError> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(TextPolishError::config(
                "Phi-3 API URL must start with http:// or https://",
            ));
        }

        if self.authorization.is_empty() {
            return Err(TextPolishError::config(
                "Phi-3 authorization value cannot be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_defaults() {
        let config = GeminiConfig::new("test-key");
        assert_eq!(config.model, "gemini-1.0-pro");
        assert_eq!(config.base_url, GEMINI_DEFAULT_BASE_URL);
    }

    #[test]
    fn test_gemini_validate() {
        let config = GeminiConfig::new("test-key");
        assert!(config.validate().is_ok());

        let mut invalid = GeminiConfig::new("");
        assert!(invalid.validate().is_err());

        invalid = GeminiConfig::new("test-key");
        invalid.base_url = "generativelanguage.googleapis.com".to_string();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_phi3_validate() {
        let config = Phi3Config::new("https://api.example.com/v1/chat/completions", "Bearer k");
        assert!(config.validate().is_ok());

        let invalid = Phi3Config::new("api.example.com", "Bearer k");
        assert!(invalid.validate().is_err());

        let invalid = Phi3Config::new("https://api.example.com", "");
        assert!(invalid.validate().is_err());
    }
}
