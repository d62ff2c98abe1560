//! HTTP client for the messages endpoint that performs copy rewrites.

use std::time::Duration;

use brandscope_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::RewriteError;
use crate::prompt::{system_prompt, user_prompt};
use crate::types::{
    ContentBlock, Message, MessagesRequest, MessagesResponse, RewriteRequest, RewriteResponse,
};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

pub const WARN_UNAVAILABLE: &str = "AI rewrite service temporarily unavailable";
pub const WARN_UNPARSEABLE: &str = "Failed to parse rewrite response";
pub const WARN_UNEXPECTED_FORMAT: &str = "Unexpected response format from AI service";

/// Client for the rewrite service.
///
/// Use [`RewriteClient::new`] for production or
/// [`RewriteClient::with_base_url`] to point at a mock server in tests.
pub struct RewriteClient {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    endpoint: Url,
}

impl RewriteClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        max_tokens: u32,
    ) -> Result<Self, RewriteError> {
        Self::with_base_url(api_key, model, timeout_secs, max_tokens, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RewriteError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        max_tokens: u32,
        base_url: &str,
    ) -> Result<Self, RewriteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("brandscope/0.1 (copy-rewrite)")
            .build()?;

        let invalid = |reason: String| RewriteError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("v1/messages"))
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            max_tokens,
            endpoint,
        })
    }

    /// Builds a client from application config, or `None` when no API key
    /// is configured.
    ///
    /// # Errors
    ///
    /// Same as [`RewriteClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>, RewriteError> {
        let Some(api_key) = config.anthropic_api_key.as_deref() else {
            return Ok(None);
        };
        Self::with_base_url(
            api_key,
            &config.rewrite_model,
            config.rewrite_timeout_secs,
            config.rewrite_max_tokens,
            &config.rewrite_base_url,
        )
        .map(Some)
    }

    /// Rewrites `request.fields` in the requested tone and language.
    ///
    /// Never fails. Transport and status errors yield
    /// [`WARN_UNAVAILABLE`]; model output that is not the expected JSON
    /// yields [`WARN_UNPARSEABLE`]; a reply without a text block yields
    /// [`WARN_UNEXPECTED_FORMAT`]. In each case `rewrites` is empty.
    pub async fn rewrite(&self, request: &RewriteRequest) -> RewriteResponse {
        if request.fields.is_empty() {
            return RewriteResponse::default();
        }

        let reply = match self.send(request).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "rewrite request failed");
                return RewriteResponse::degraded(WARN_UNAVAILABLE);
            }
        };

        let Some(ContentBlock::Text { text }) = reply.content.into_iter().next() else {
            tracing::warn!("rewrite reply has no leading text block");
            return RewriteResponse::degraded(WARN_UNEXPECTED_FORMAT);
        };

        match parse_rewrite_text(&text) {
            Ok(response) => {
                tracing::info!(
                    requested = request.fields.len(),
                    rewritten = response.rewrites.len(),
                    "rewrite complete"
                );
                response
            }
            Err(e) => {
                tracing::warn!(error = %e, "rewrite reply is not valid JSON");
                RewriteResponse::degraded(WARN_UNPARSEABLE)
            }
        }
    }

    async fn send(&self, request: &RewriteRequest) -> Result<MessagesResponse, RewriteError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: system_prompt(request.style_hints.as_deref()),
            messages: vec![Message {
                role: "user",
                content: user_prompt(request),
            }],
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(RewriteError::Status {
                status: status.as_u16(),
                body: text.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&text).map_err(|e| RewriteError::Deserialize {
            context: self.endpoint.to_string(),
            source: e,
        })
    }
}

/// Parses model output, tolerating a surrounding Markdown code fence.
fn parse_rewrite_text(text: &str) -> Result<RewriteResponse, serde_json::Error> {
    serde_json::from_str(strip_code_fence(text))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (`json`) on the opening line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
