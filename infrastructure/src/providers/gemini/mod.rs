//! Gemini provider adapter
//!
//! Implements the `ModelGateway` port over the Generative Language REST API.

mod adapter;
pub mod types;

pub use adapter::{DEFAULT_BASE_URL, GeminiGateway};
