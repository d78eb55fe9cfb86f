//! TextPolish LLM integration
//!
//! Gemini and Phi-3 chat-completion backends for text formatting and
//! summarization

mod formatter_trait;
mod gemini;
mod phi3;
mod prompts;
mod types;

pub use formatter_trait::TextFormatter;
pub use gemini::{
    default_safety_settings, GeminiClient, GenerationConfig, HarmBlockThreshold, HarmCategory,
    SafetySetting,
};
pub use phi3::{Phi3Client, PHI3_MODEL};
pub use prompts::{format_prompt, FORMAT_INSTRUCTIONS};
pub use types::{parse_model_reply, FormatResult, ModelReply};
