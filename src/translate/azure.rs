use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::interface::{TranslationJob, Translator};
use crate::error::ProxyError;
use crate::settings::Settings;

pub const API_VERSION: &str = "3.0";
const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";

#[derive(Debug, Serialize)]
struct VendorText<'a> {
    #[serde(rename = "Text")]
    text: &'a str,
}

/// Client for the Azure Translator Text v3 `translate` operation.
#[derive(Debug, Clone)]
pub struct AzureTranslator {
    client: Client,
    endpoint: Option<String>,
    key: Option<String>,
    region: Option<String>,
}

impl AzureTranslator {
    pub fn new(endpoint: Option<String>, key: Option<String>, region: Option<String>) -> Self {
        info!(
            "Initialized AzureTranslator: endpoint={}, region={}",
            endpoint.as_deref().unwrap_or("<unset>"),
            region.as_deref().unwrap_or("<none>")
        );
        Self {
            client: Client::new(),
            endpoint,
            key,
            region,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.endpoint().map(str::to_string),
            settings.key().map(str::to_string),
            settings.region().map(str::to_string),
        )
    }

    fn query_params(job: &TranslationJob) -> Vec<(&'static str, &str)> {
        let mut params = vec![("api-version", API_VERSION), ("to", job.to.as_str())];
        if let Some(from) = &job.from {
            params.push(("from", from.as_str()));
        }
        params
    }
}

/// Pulls `[0].translations[0].text` out of a vendor reply, falling back to
/// an empty string when the reply is shaped differently.
pub fn first_translation(body: &Value) -> String {
    match body.pointer("/0/translations/0/text").and_then(Value::as_str) {
        Some(text) => text.to_string(),
        None => {
            warn!("Unexpected translator response shape: {}", body);
            String::new()
        }
    }
}

#[async_trait]
impl Translator for AzureTranslator {
    async fn translate(&self, job: &TranslationJob) -> Result<String, ProxyError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(ProxyError::NotConfigured("TRANSLATOR_ENDPOINT"))?;
        let key = self
            .key
            .as_deref()
            .ok_or(ProxyError::NotConfigured("TRANSLATOR_KEY"))?;

        let url = format!("{}/translate", endpoint.trim_end_matches('/'));
        debug!("Calling translator: url={}, to={}, from={:?}", url, job.to, job.from);

        let mut request = self
            .client
            .post(&url)
            .query(&Self::query_params(job))
            .header(KEY_HEADER, key)
            .json(&[VendorText { text: &job.text }]);
        if let Some(region) = &self.region {
            request = request.header(REGION_HEADER, region);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let details = response.text().await?;
            warn!("Translator returned {}: {}", status, details);
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        let body: Value = response.json().await?;
        Ok(first_translation(&body))
    }

    fn is_configured(&self) -> bool {
        self.endpoint.is_some() && self.key.is_some()
    }
}
