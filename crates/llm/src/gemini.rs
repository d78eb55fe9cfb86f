use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use textpolish_common::{GeminiConfig, Result, TextPolishError};
use tracing::{debug, info};

use crate::formatter_trait::TextFormatter;
use crate::prompts::format_prompt;
use crate::types::{parse_model_reply, FormatResult};

/// Generation parameters sent with every request (camelCase on the wire)
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub temperature: f64,

    #[serde(rename = "topP")]
    pub top_p: f64,

    #[serde(rename = "topK")]
    pub top_k: i32,

    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: i32,

    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_p: 1.0,
            top_k: 0,
            max_output_tokens: 2048,
            response_mime_type: "text/plain".to_string(),
        }
    }
}

/// Harm category for safety settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

/// Blocking threshold for a harm category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HarmBlockThreshold {
    #[serde(rename = "BLOCK_MEDIUM_AND_ABOVE")]
    BlockMediumAndAbove,
}

/// Safety setting entry (`safetySettings`)
#[derive(Debug, Clone, Serialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// The four harm categories, each blocked at medium and above
pub fn default_safety_settings() -> Vec<SafetySetting> {
    [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ]
    .into_iter()
    .map(|category| SafetySetting {
        category,
        threshold: HarmBlockThreshold::BlockMediumAndAbove,
    })
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Gemini generateContent request
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,

    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,

    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

/// Gemini generateContent response
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    // Absent when generation was blocked
    content: Option<Content>,
}

/// Gemini generateContent API client
///
/// Single-turn, non-streaming. Generation parameters and safety settings
/// are fixed at construction and sent with every request.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
    client: Client,
}

impl GeminiClient {
    /// Create new Gemini client
    pub fn new(config: GeminiConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| {
                TextPolishError::network(format!("Failed to create HTTP client: {}", e))
            })?;

        info!("Gemini client initialized: model={}", config.model);

        Ok(Self {
            config,
            generation_config: GenerationConfig::default(),
            safety_settings: default_safety_settings(),
            client,
        })
    }

    /// Send raw text to the model, returning formatted text and summary
    pub async fn prompt(&self, text: &str) -> Result<FormatResult> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: format_prompt(text),
                }],
            }],
            generation_config: self.generation_config.clone(),
            safety_settings: self.safety_settings.clone(),
        };

        debug!(
            "Sending generateContent request - Model: {}, Text length: {}",
            self.config.model,
            text.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TextPolishError::network(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| TextPolishError::network(format!("Gemini API error: {}", e)))?;

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TextPolishError::parse(format!("Failed to parse Gemini response: {}", e)))?;

        let reply = extract_reply_text(body)?;

        debug!("Received Gemini reply - Length: {}", reply.len());

        parse_model_reply(&reply)
    }
}

/// Pull the first candidate's text out of a generateContent response
fn extract_reply_text(body: GenerateContentResponse) -> Result<String> {
    let candidate = body
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| TextPolishError::response_format("response contained no candidates"))?;

    let content = candidate
        .content
        .ok_or_else(|| TextPolishError::response_format("candidate has no content"))?;

    let part = content
        .parts
        .into_iter()
        .next()
        .ok_or_else(|| TextPolishError::response_format("candidate content has no parts"))?;

    Ok(part.text)
}

#[async_trait]
impl TextFormatter for GeminiClient {
    async fn prompt(&self, text: &str) -> Result<FormatResult> {
        self.prompt(text).await
    }
}
