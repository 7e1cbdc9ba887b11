//! Model gateway port
//!
//! Defines the interface for submitting one multimodal analysis request to
//! a named remote model. Implementations (adapters) live in the
//! infrastructure layer.

use aidpal_domain::{ImagePayload, Model};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during an outbound model call
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    /// The remote answered with a non-success status.
    #[error("Remote call failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Request timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Numeric status carried by the failure, when the remote supplied one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// One multimodal analysis request: an image part, a text part, and the
/// structured-output contract the response must conform to.
#[derive(Debug, Clone)]
pub struct VisionRequest {
    pub image: ImagePayload,
    pub prompt: String,
    /// Schema the remote is asked to constrain its response to. This is a
    /// request-time constraint, not just a prompt hint.
    pub response_schema: serde_json::Value,
}

/// Gateway for remote model invocation
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Submit the request to the named model and return its response text.
    async fn generate(
        &self,
        model: &Model,
        request: &VisionRequest,
    ) -> Result<String, GatewayError>;
}
