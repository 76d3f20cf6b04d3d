//! Generative model provider abstraction
//!
//! The resolver only sees "prompt in, text out". Each provider owns its
//! transport and response format.

use crate::error::ProviderError;

pub mod gemini;

pub use gemini::GeminiProvider;

/// Trait for text generation providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one prompt and returns the model's raw text reply
    ///
    /// Called once per request; implementations do not retry.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
