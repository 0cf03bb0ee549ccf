//! HTTP transport for the Generative Language API.

use crate::config::ApiKey;
use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::{Content, GenerateContentRequest, GenerateContentResponse};
use recipe_domain::{GenerationSettings, Model};
use std::time::Duration;
use tracing::debug;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Stateless HTTP client bound to one API key and base URL.
///
/// Cloning is cheap; `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct GeminiTransport {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl GeminiTransport {
    pub fn new(base_url: impl Into<String>, api_key: ApiKey) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(GeminiError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    pub fn endpoint(&self, model: &Model, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.base_url.trim_end_matches('/'),
            model,
            method
        )
    }

    /// One-shot `generateContent` call.
    pub async fn generate(
        &self,
        settings: &GenerationSettings,
        contents: &[Content],
    ) -> Result<GenerateContentResponse> {
        let response = self
            .post(settings, contents, "generateContent", false)
            .await?;
        let raw = response.text().await?;

        let mut parsed: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|e| GeminiError::ParseError {
                error: e.to_string(),
                raw,
            })?;
        if let Some(error) = parsed.error.take() {
            return Err(error.into());
        }

        Ok(parsed)
    }

    /// `streamGenerateContent` call; the body is an SSE stream.
    pub async fn stream(
        &self,
        settings: &GenerationSettings,
        contents: &[Content],
    ) -> Result<reqwest::Response> {
        self.post(settings, contents, "streamGenerateContent", true)
            .await
    }

    async fn post(
        &self,
        settings: &GenerationSettings,
        contents: &[Content],
        method: &str,
        sse: bool,
    ) -> Result<reqwest::Response> {
        let url = self.endpoint(&settings.model, method);
        let body = GenerateContentRequest {
            contents,
            generation_config: settings.into(),
        };

        debug!(
            model = %settings.model,
            contents = contents.len(),
            stream = sse,
            "Gemini API request"
        );

        let mut request = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            // Covers the whole exchange, body included
            .timeout(settings.request_timeout)
            .json(&body);
        if sse {
            request = request.query(&[("alt", "sse")]);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}
