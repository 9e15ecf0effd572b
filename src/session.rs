//! Session state and its command handlers.
//!
//! One [`Session`] owns the chat history and the image-panel flag for the
//! lifetime of a run. All mutation goes through the three command handlers
//! (`submit_question`, `toggle_image_panel`, `submit_image_prompt`); the UI
//! re-renders the full state after each one. The two submit handlers hold
//! the session through a single awaited provider call, so at most one
//! outbound request is ever in flight.

use crate::ai::{
    ChatService, GeminiChatClient, ImageGenerationService, StabilityImageClient,
};
use crate::image::{ImageRenderer, RenderedImage};
use crate::models::{ChatTurn, Config};
use crate::{Error, Result};
use std::path::Path;

/// Session-local UI state. History is strictly append-only.
#[derive(Debug, Default)]
pub struct SessionState {
    pub history: Vec<ChatTurn>,
    pub image_panel_visible: bool,
}

/// Result of an image-prompt submission.
///
/// Rendered images are ephemeral presentation output; they are deliberately
/// never appended to `history`.
#[derive(Debug)]
pub enum ImageOutcome {
    /// The panel was hidden; nothing was generated or rendered.
    PanelHidden,
    Rendered(RenderedImage),
}

pub struct Session {
    state: SessionState,
    chat: Option<Box<dyn ChatService>>,
    image_gen: Option<Box<dyn ImageGenerationService>>,
    renderer: ImageRenderer,
}

impl Session {
    /// Build a session from environment configuration.
    ///
    /// A missing API key leaves the corresponding adapter unset; the
    /// feature path then fails with a missing-key notice instead of at
    /// startup.
    pub fn new(config: &Config) -> Result<Self> {
        // Reuse one HTTP connection pool across provider clients.
        let http_client = reqwest::Client::new();

        let chat = config.gemini_api_key.as_ref().map(|key| {
            Box::new(GeminiChatClient::new_with_client(
                key.clone(),
                config.gemini_model.clone(),
                http_client.clone(),
            )) as Box<dyn ChatService>
        });

        let image_gen = config.stability_api_key.as_ref().map(|key| {
            Box::new(StabilityImageClient::new_with_client(
                key.clone(),
                http_client,
            )) as Box<dyn ImageGenerationService>
        });

        let renderer = ImageRenderer::new(Path::new(&config.output_dir))?;

        Ok(Self::with_services(chat, image_gen, renderer))
    }

    /// Build a session from concrete service dependencies.
    ///
    /// This is primarily useful for tests and harnesses that need to inject
    /// mocks.
    pub fn with_services(
        chat: Option<Box<dyn ChatService>>,
        image_gen: Option<Box<dyn ImageGenerationService>>,
        renderer: ImageRenderer,
    ) -> Self {
        Self {
            state: SessionState::default(),
            chat,
            image_gen,
            renderer,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Submit a user question to the chat service.
    ///
    /// On success the history grows by exactly two turns, user then bot. A
    /// provider failure is folded into the bot turn as a plain message, so
    /// a user turn never dangles without its reply.
    pub async fn submit_question(&mut self, text: &str) -> Result<()> {
        let chat = self
            .chat
            .as_ref()
            .ok_or(Error::MissingGeminiKey)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        self.state.history.push(ChatTurn::user(text));
        tracing::info!("Invocando sabedoria ancestral...");

        let reply = match chat.generate_reply(text).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Chat reply failed: {}", e);
                format!("Erro ao gerar resposta com Gemini: {}", e)
            }
        };

        self.state.history.push(ChatTurn::bot(reply));
        Ok(())
    }

    /// Flip the image-panel visibility. Always succeeds.
    pub fn toggle_image_panel(&mut self) -> bool {
        self.state.image_panel_visible = !self.state.image_panel_visible;
        self.state.image_panel_visible
    }

    /// Submit an image prompt to the image service.
    ///
    /// A hidden panel makes this a no-op. Failures (missing key, blank
    /// prompt, remote error) surface as errors for the UI to turn into a
    /// transient notice; the history is never touched on this path.
    pub async fn submit_image_prompt(&mut self, text: &str) -> Result<ImageOutcome> {
        if !self.state.image_panel_visible {
            return Ok(ImageOutcome::PanelHidden);
        }

        let image_gen = self
            .image_gen
            .as_ref()
            .ok_or(Error::MissingStabilityKey)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyImagePrompt);
        }

        tracing::info!("Desenhando visão mística...");
        let image_data = image_gen.generate_image(text).await?;
        let rendered = self.renderer.render(&image_data).await?;

        Ok(ImageOutcome::Rendered(rendered))
    }
}
