use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use textpolish_common::{Phi3Config, Result, TextPolishError};
use tracing::{debug, info};

use crate::formatter_trait::TextFormatter;
use crate::prompts::format_prompt;
use crate::types::{parse_model_reply, FormatResult};

/// Model identifier sent with every request
pub const PHI3_MODEL: &str = "Phi-3-mini-128k-instruct";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat-completion request body
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

/// Chat-completion transport envelope
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Phi-3 chat-completion API client
///
/// The assistant's message content is itself expected to be JSON (the
/// model-emitted payload), so every response is decoded twice: once for
/// the transport envelope, once for the reply inside it.
#[derive(Debug, Clone)]
pub struct Phi3Client {
    config: Phi3Config,
    client: Client,
}

impl Phi3Client {
    /// Create new Phi-3 client
    pub fn new(config: Phi3Config) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| {
                TextPolishError::network(format!("Failed to create HTTP client: {}", e))
            })?;

        info!("Phi-3 client initialized: {}", config.api_url);

        Ok(Self { config, client })
    }

    /// Send raw text to the model, returning formatted text and summary
    pub async fn prompt(&self, text: &str) -> Result<FormatResult> {
        let request = ChatCompletionRequest {
            model: PHI3_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: format_prompt(text),
            }],
        };

        debug!(
            "Sending chat-completion request - Model: {}, Text length: {}",
            PHI3_MODEL,
            text.len()
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", &self.config.authorization)
            .json(&request)
            .send()
            .await
            .map_err(|e| TextPolishError::network(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| TextPolishError::network(format!("Chat-completion API error: {}", e)))?;

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            TextPolishError::parse(format!("Failed to parse chat-completion response: {}", e))
        })?;

        let content = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TextPolishError::response_format("response contained no choices"))?
            .message
            .content;

        debug!("Received chat-completion reply - Length: {}", content.len());

        parse_model_reply(&content)
    }
}

#[async_trait]
impl TextFormatter for Phi3Client {
    async fn prompt(&self, text: &str) -> Result<FormatResult> {
        self.prompt(text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = ChatCompletionRequest {
            model: PHI3_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: format_prompt("some text"),
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "Phi-3-mini-128k-instruct");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], format_prompt("some text"));
    }

    #[test]
    fn test_new_rejects_bad_url() {
        let err = Phi3Client::new(Phi3Config::new("not-a-url", "Bearer k")).unwrap_err();
        assert!(matches!(err, TextPolishError::Config(_)));
    }
}
