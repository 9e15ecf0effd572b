//! AI service integration for chat replies and image generation
//!
//! Provides interfaces to Gemini's generateContent API for text replies and
//! Stability AI's stable-image API for image generation.

pub mod gemini;
pub mod mock;
pub mod stability;

pub use gemini::GeminiChatClient;
pub use mock::{MockChatClient, MockImageClient};
pub use stability::StabilityImageClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ChatService: Send + Sync {
    async fn generate_reply(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>>;
}
