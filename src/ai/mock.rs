use super::{ChatService, ImageGenerationService};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scripted outcome for one mock call. `Err` carries the provider detail.
type Scripted<T> = std::result::Result<T, String>;

#[derive(Clone)]
pub struct MockChatClient {
    responses: Arc<Mutex<Vec<Scripted<String>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_reply_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(Ok(response));
        self
    }

    pub fn with_error_response(self, detail: String) -> Self {
        self.responses.lock().unwrap().push(Err(detail));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    async fn generate_reply(&self, prompt: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            return Ok(format!("O Oráculo responde sobre: {}", prompt));
        }

        let index = (*count - 1) % responses.len();
        match &responses[index] {
            Ok(reply) => Ok(reply.clone()),
            Err(detail) => Err(Error::AiProvider(detail.clone())),
        }
    }
}

#[derive(Clone)]
pub struct MockImageClient {
    responses: Arc<Mutex<Vec<Scripted<Vec<u8>>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_image_response(self, response: Vec<u8>) -> Self {
        self.responses.lock().unwrap().push(Ok(response));
        self
    }

    pub fn with_error_response(self, detail: String) -> Self {
        self.responses.lock().unwrap().push(Err(detail));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// A 1x1 PNG usable wherever a decodable default is needed.
    pub fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("encoding a 1x1 PNG to a Vec cannot fail");
        bytes
    }
}

impl Default for MockImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageClient {
    async fn generate_image(&self, _prompt: &str) -> Result<Vec<u8>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(Self::tiny_png());
        }

        let index = (*count - 1) % responses.len();
        match &responses[index] {
            Ok(bytes) => Ok(bytes.clone()),
            Err(detail) => Err(Error::AiProvider(detail.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_chat_client_default_reply() {
        let client = MockChatClient::new();

        let reply = client.generate_reply("onde fica Kakariko?").await.unwrap();
        assert!(reply.contains("Kakariko"));
    }

    #[tokio::test]
    async fn test_mock_chat_client_custom_responses_cycle() {
        let client = MockChatClient::new()
            .with_reply_response("resposta 1".to_string())
            .with_reply_response("resposta 2".to_string());

        assert_eq!(client.generate_reply("a").await.unwrap(), "resposta 1");
        assert_eq!(client.generate_reply("b").await.unwrap(), "resposta 2");
        // Should cycle back
        assert_eq!(client.generate_reply("c").await.unwrap(), "resposta 1");
    }

    #[tokio::test]
    async fn test_mock_chat_client_scripted_error() {
        let client = MockChatClient::new().with_error_response("quota exceeded".to_string());

        let err = client.generate_reply("ola").await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_mock_image_client_default_is_decodable() {
        let client = MockImageClient::new();

        let bytes = client.generate_image("uma visão").await.unwrap();
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!(img.width(), 1);
        assert_eq!(img.height(), 1);
    }

    #[tokio::test]
    async fn test_mock_image_client_call_count() {
        let client = MockImageClient::new();
        assert_eq!(client.get_call_count(), 0);

        client.generate_image("uma visão").await.unwrap();
        assert_eq!(client.get_call_count(), 1);
    }
}
