/// TextPolish error types
#[derive(Debug, thiserror::Error)]
pub enum TextPolishError {
    /// Configuration error (missing credential, bad endpoint)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// A response body (envelope or model reply) is not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Envelope JSON lacks the expected candidate/choice/field
    #[error("Unexpected response format: {0}")]
    ResponseFormat(String),

    /// Model reply is valid JSON but deviates from the requested shape
    #[error("Model reply schema error: {0}")]
    Schema(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TextPolishError {
    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Self::Parse(msg.into())
    }

    /// Create response format error
    pub fn response_format<S: Into<String>>(msg: S) -> Self {
        Self::ResponseFormat(msg.into())
    }

    /// Create schema error
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        Self::Schema(msg.into())
    }
}
