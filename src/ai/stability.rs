//! Stability AI stable-image client.

use crate::ai::ImageGenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.stability.ai";
const GENERATE_PATH: &str = "/v2beta/stable-image/generate/core";

pub struct StabilityImageClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl StabilityImageClient {
    pub fn new(api_key: String) -> Self {
        Self::new_with_client(api_key, Client::new())
    }

    pub fn new_with_client(api_key: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[async_trait]
impl ImageGenerationService for StabilityImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        let form = Form::new().text("prompt", prompt.to_string());

        tracing::debug!("Sending image generation request to Stability AI");

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "image/*")
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Stability AI: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Stability API error (status {}): {}", status, error_text);
            return Err(Error::AiProvider(format!(
                "Stability API error (status {}): {}",
                status, error_text
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
