use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProxyError;
use crate::languages::is_auto_detect;

/// Body accepted by `POST /api/translate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// A request that passed validation. `from == None` means auto-detect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationJob {
    pub text: String,
    pub from: Option<String>,
    pub to: String,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    /// Parse a raw request body. A missing text is reported before anything
    /// else about the body, including an absent body or badly typed
    /// `from`/`to`.
    pub fn from_body(body: &[u8]) -> Result<TranslationJob, ProxyError> {
        let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(body)?
        };

        let has_text = value
            .get("text")
            .and_then(Value::as_str)
            .is_some_and(|t| !t.is_empty());
        if !has_text {
            return Err(ProxyError::MissingText);
        }

        let request: TranslateRequest = serde_json::from_value(value)?;
        request.validate()
    }

    /// Text is checked before the target, so a missing text always wins.
    pub fn validate(self) -> Result<TranslationJob, ProxyError> {
        let text = self
            .text
            .filter(|t| !t.is_empty())
            .ok_or(ProxyError::MissingText)?;
        let to = self
            .to
            .filter(|t| !t.is_empty() && !is_auto_detect(t))
            .ok_or(ProxyError::MissingTarget)?;
        let from = self.from.filter(|f| !f.is_empty() && !is_auto_detect(f));

        Ok(TranslationJob { text, from, to })
    }
}

/// A vendor able to translate a single text.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Returns the translated text, or an error carrying how the caller
    /// should be answered.
    async fn translate(&self, job: &TranslationJob) -> Result<String, ProxyError>;

    fn is_configured(&self) -> bool {
        true
    }
}
