//! Live assistant backed by the Gemini `generateContent` endpoint.
//!
//! The API key is held in a `SecretBox` and sent through `RedactedHeader`, so
//! it is never printed by `Debug` output or by reqwest's request logging.
//! Each operation makes exactly one request; failures are logged and turned
//! into fixed fallback values instead of errors.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header;
use secrecy::{ExposeSecret, SecretBox};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::AiAssistant;
use super::prompt::{
    DRAFT_EMPTY_FALLBACK, DRAFT_ERROR_FALLBACK, draft_prompt, escalation_prompt,
    failed_escalation,
};
use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::error::{Result, SmartHelpError};
use crate::types::{EscalationAnalysis, Ticket, Tone};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Wrapper for sensitive header values that redacts the value when formatted.
struct RedactedHeader {
    value: String,
}

impl RedactedHeader {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    fn as_header_value(&self) -> Result<header::HeaderValue> {
        let mut value = header::HeaderValue::from_str(&self.value)
            .map_err(|_| SmartHelpError::Config("API key is not a valid header value".into()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Display for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Debug for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactedHeader")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

impl GenerateContentRequest {
    fn new(prompt: String, response_mime_type: Option<&'static str>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config: response_mime_type
                .map(|response_mime_type| GenerationConfig { response_mime_type }),
        }
    }
}

/// Gemini-backed assistant
pub struct LiveAiClient {
    client: Client,
    api_key: SecretBox<String>,
    model: String,
    base_url: String,
}

impl fmt::Debug for LiveAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveAiClient")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl LiveAiClient {
    /// Create a client with the default model and endpoint.
    ///
    /// Configures HTTP client with 30s connect timeout and 60s total timeout.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_options(
            api_key,
            DEFAULT_MODEL,
            DEFAULT_BASE_URL,
            Duration::from_secs(60),
            Duration::from_secs(30),
        )
    }

    /// Create a client from configuration, or `None` when no key is configured
    pub fn from_config(config: &Config) -> Result<Option<Self>> {
        let Some(api_key) = config.api_key() else {
            return Ok(None);
        };
        Self::with_options(
            &api_key,
            &config.ai.model,
            &config.ai.base_url,
            config.request_timeout(),
            config.connect_timeout(),
        )
        .map(Some)
    }

    pub fn with_options(
        api_key: &str,
        model: &str,
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            client,
            api_key: SecretBox::new(Box::new(api_key.to_string())),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Send one generation request and return the response text, if any.
    async fn generate(
        &self,
        prompt: String,
        response_mime_type: Option<&'static str>,
    ) -> Result<Option<String>> {
        let key_header = RedactedHeader::new(self.api_key.expose_secret());
        let body = GenerateContentRequest::new(prompt, response_mime_type);

        tracing::debug!(model = %self.model, json = response_mime_type.is_some(), "sending generation request");

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, key_header.as_header_value()?)
            .header(
                header::CONTENT_TYPE,
                header::HeaderValue::from_static("application/json"),
            )
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(SmartHelpError::Api(format!(
                "HTTP {status}: {}",
                detail.trim()
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.text())
    }
}

#[async_trait]
impl AiAssistant for LiveAiClient {
    async fn generate_draft(&self, ticket: &Ticket, tone: Tone, instruction: Option<&str>) -> String {
        match self
            .generate(draft_prompt(ticket, tone, instruction), None)
            .await
        {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::warn!(ticket = %ticket.id, "draft response carried no text");
                DRAFT_EMPTY_FALLBACK.to_string()
            }
            Err(e) => {
                tracing::error!(ticket = %ticket.id, error = %e, "draft generation failed");
                DRAFT_ERROR_FALLBACK.to_string()
            }
        }
    }

    async fn analyze_escalation(&self, ticket: &Ticket) -> EscalationAnalysis {
        let result = self
            .generate(escalation_prompt(ticket), Some("application/json"))
            .await
            .and_then(|text| {
                let text = text.ok_or_else(|| {
                    SmartHelpError::Api("escalation response carried no text".to_string())
                })?;
                Ok(serde_json::from_str::<EscalationAnalysis>(&text)?)
            });

        match result {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::error!(ticket = %ticket.id, error = %e, "escalation analysis failed");
                failed_escalation()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_header_display() {
        let header = RedactedHeader::new("secret-api-key-12345");
        assert_eq!(format!("{}", header), "[REDACTED]");
    }

    #[test]
    fn test_redacted_header_debug() {
        let header = RedactedHeader::new("secret-api-key-12345");
        let debug_str = format!("{:?}", header);
        assert!(!debug_str.contains("secret-api-key-12345"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_client_debug_hides_key() {
        let client = LiveAiClient::new("secret-api-key-12345").unwrap();
        let debug_str = format!("{client:?}");
        assert!(!debug_str.contains("secret-api-key-12345"));
        assert!(debug_str.contains(DEFAULT_MODEL));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = LiveAiClient::with_options(
            "k",
            "gemini-test",
            "http://localhost:8080/",
            Duration::from_secs(5),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let draft = serde_json::to_value(GenerateContentRequest::new("hi".into(), None)).unwrap();
        assert_eq!(draft, serde_json::json!({"contents": [{"parts": [{"text": "hi"}]}]}));

        let escalation = serde_json::to_value(GenerateContentRequest::new(
            "hi".into(),
            Some("application/json"),
        ))
        .unwrap();
        assert_eq!(
            escalation["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "Hello "}, {"text": "there"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Hello there"));
    }

    #[test]
    fn test_response_without_text() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text(), None);

        let no_parts: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert_eq!(no_parts.text(), None);
    }
}
