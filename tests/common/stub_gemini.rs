//! Stand-in for the generative language API.
//!
//! Every request gets the same canned reply; requests are recorded so tests
//! can inspect the path, headers and body the client sent.

use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub body: serde_json::Value,
}

pub struct StubGemini {
    pub base_url: String,
    server: MockServer,
}

impl StubGemini {
    /// Serve `reply` with `status` for every POST
    pub async fn start(status: u16, reply: impl Into<String>) -> Self {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(status).set_body_raw(reply.into(), "application/json"),
            )
            .mount(&server)
            .await;

        Self {
            base_url: server.uri(),
            server,
        }
    }

    /// Reply with a single candidate whose content has the given text parts
    pub async fn with_parts(parts: &[&str]) -> Self {
        let parts: Vec<_> = parts
            .iter()
            .map(|text| serde_json::json!({ "text": text }))
            .collect();
        let body = serde_json::json!({
            "candidates": [{ "content": { "parts": parts } }]
        });
        Self::start(200, body.to_string()).await
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| RecordedRequest {
                path: request.url.path().to_string(),
                api_key: request
                    .headers
                    .get("x-goog-api-key")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string),
                body: serde_json::from_slice(&request.body).unwrap_or(serde_json::Value::Null),
            })
            .collect()
    }
}
