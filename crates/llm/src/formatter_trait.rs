use crate::types::FormatResult;
use async_trait::async_trait;
use textpolish_common::Result;

/// Common trait for formatting/summarization backends
#[async_trait]
pub trait TextFormatter: Send + Sync {
    /// Send raw text to the model, returning formatted text and summary
    async fn prompt(&self, text: &str) -> Result<FormatResult>;
}
