//! Data models and structures
//!
//! Defines the chat-turn data model and the environment-backed
//! configuration for the Gemini and Stability AI integrations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One message in the chat log. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub sender: Sender,
    pub message: String,
}

impl ChatTurn {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            message: message.into(),
        }
    }

    pub fn bot(message: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            message: message.into(),
        }
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Text-generation credential. `None` disables the question path.
    pub gemini_api_key: Option<String>,
    /// Image-generation credential. `None` disables the image path.
    pub stability_api_key: Option<String>,
    pub gemini_model: String,
    pub output_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            stability_api_key: std::env::var("STABILITY_API_KEY").ok(),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "output".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_serialization() {
        let turn = ChatTurn::user("Olá, Oráculo");

        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains("\"sender\":\"user\""));

        let deserialized: ChatTurn = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.sender, Sender::User);
        assert_eq!(deserialized.message, "Olá, Oráculo");
    }

    #[test]
    fn test_turn_constructors() {
        assert_eq!(ChatTurn::bot("resposta").sender, Sender::Bot);
        assert_eq!(ChatTurn::user("pergunta").sender, Sender::User);
    }
}
