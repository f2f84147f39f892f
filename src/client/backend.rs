use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::translate::TranslateRequest;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-success reply from the proxy. The body is not inspected.
    #[error("HTTP {0}")]
    Status(u16),

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Auto-detect cannot be a target language")]
    AutoDetectTarget,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Where the form sends its translate requests.
#[async_trait]
pub trait TranslateBackend: Send + Sync {
    async fn translate(&self, request: &TranslateRequest) -> Result<String, ClientError>;
}

/// Talks to a running proxy over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TranslateBackend for HttpBackend {
    async fn translate(&self, request: &TranslateRequest) -> Result<String, ClientError> {
        let url = format!("{}/api/translate", self.base_url.trim_end_matches('/'));
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        debug!("Proxy answered {}", status);
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let data: Value = response.json().await?;
        Ok(data
            .get("translatedText")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn posts_form_fields_and_reads_translation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/translate"))
            .and(body_json(json!({"text": "hello", "from": "auto", "to": "fr"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"translatedText": "bonjour"})),
            )
            .mount(&server)
            .await;

        let backend = HttpBackend::new(server.uri());
        let result = backend
            .translate(&TranslateRequest::new("hello", "auto", "fr"))
            .await
            .unwrap();
        assert_eq!(result, "bonjour");
    }

    #[tokio::test]
    async fn error_status_becomes_http_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "No text provided."})),
            )
            .mount(&server)
            .await;

        let backend = HttpBackend::new(format!("{}/", server.uri()));
        let err = backend
            .translate(&TranslateRequest::new("", "auto", "fr"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP 400");
    }
}
