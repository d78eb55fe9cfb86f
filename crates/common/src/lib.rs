pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{GeminiConfig, Phi3Config};
pub use error::TextPolishError;
pub type Result<T> = std::result::Result<T, TextPolishError>;
