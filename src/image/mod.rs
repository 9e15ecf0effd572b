//! Ephemeral image render output
//!
//! Decodes generated image bytes and writes them as uniquely named PNGs for
//! the terminal UI to point at. Rendered images are presentation output
//! only; they are never stored in the chat history.

pub mod renderer;

pub use renderer::{ImageRenderer, RenderedImage};
