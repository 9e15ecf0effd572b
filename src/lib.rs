//! Assistente de Hyrule IA - a Zelda-themed terminal chat assistant
//!
//! Forwards user questions to Gemini's text-generation API and image prompts
//! to Stability AI's image-generation API, rendering both in a themed chat
//! log held in session-local state.

pub mod ai;
pub mod app;
pub mod error;
pub mod image;
pub mod models;
pub mod render;
pub mod session;

pub use error::{Error, Result};
