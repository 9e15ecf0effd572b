//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Por favor, digite algo.")]
    EmptyInput,

    #[error("Por favor, descreva a imagem.")]
    EmptyImagePrompt,

    #[error("API Key do Gemini não encontrada.")]
    MissingGeminiKey,

    #[error("API Key da Stability AI não encontrada.")]
    MissingStabilityKey,

    #[error("Invariant violation: {0}")]
    Invariant(String),
}

impl Error {
    /// True for precondition failures the UI surfaces as a warning rather
    /// than an error (blank input, unconfigured key).
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput
                | Error::EmptyImagePrompt
                | Error::MissingGeminiKey
                | Error::MissingStabilityKey
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_the_service() {
        let err = Error::MissingGeminiKey;
        assert_eq!(err.to_string(), "API Key do Gemini não encontrada.");
        assert!(err.is_precondition());

        let err = Error::MissingStabilityKey;
        assert_eq!(err.to_string(), "API Key da Stability AI não encontrada.");
        assert!(err.is_precondition());
    }

    #[test]
    fn test_blank_input_notices_differ_per_path() {
        assert_eq!(Error::EmptyInput.to_string(), "Por favor, digite algo.");
        assert_eq!(
            Error::EmptyImagePrompt.to_string(),
            "Por favor, descreva a imagem."
        );
        assert!(Error::EmptyImagePrompt.is_precondition());
    }

    #[test]
    fn test_remote_failure_is_not_a_precondition() {
        assert!(!Error::AiProvider("boom".to_string()).is_precondition());
    }
}
