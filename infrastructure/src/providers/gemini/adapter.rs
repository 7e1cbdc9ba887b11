//! Gemini gateway adapter
//!
//! Implements [`ModelGateway`] by POSTing `generateContent` requests to the
//! Generative Language REST API. One request per call, no retries of its
//! own; the fallback policy lives in the application layer.

use super::types;
use aidpal_application::{GatewayError, ModelGateway, VisionRequest};
use aidpal_domain::Model;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiGateway {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiGateway {
    /// Create a new gateway.
    ///
    /// `timeout` bounds each request at the transport level. `None` leaves
    /// requests unbounded, matching the orchestrator's own policy of not
    /// imposing per-trial timeouts.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn generate(
        &self,
        model: &Model,
        request: &VisionRequest,
    ) -> Result<String, GatewayError> {
        let body = types::GenerateContentRequest {
            contents: vec![types::Content {
                role: "user".to_string(),
                parts: vec![
                    types::Part::InlineData {
                        inline_data: types::Blob {
                            mime_type: request.image.media_type().to_string(),
                            data: request.image.data().to_string(),
                        },
                    },
                    types::Part::Text {
                        text: request.prompt.clone(),
                    },
                ],
            }],
            generation_config: types::GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: request.response_schema.clone(),
            },
        };

        debug!(%model, "Calling generateContent");

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        if !status.is_success() {
            return Err(types::error_from_response(status.as_u16(), &body_text));
        }

        let parsed: types::GenerateContentResponse = serde_json::from_str(&body_text)
            .map_err(|e| GatewayError::Other(format!("Unexpected response shape: {}", e)))?;

        let text = parsed.text();
        if text.is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(text)
    }
}
