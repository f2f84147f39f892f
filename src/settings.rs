use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub translator_key: Option<String>,
    #[serde(default)]
    pub translator_endpoint: Option<String>,
    #[serde(default)]
    pub translator_region: Option<String>,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Settings {
    /// Load from the optional file named by `CONFIG_PATH` (default `conf`),
    /// then the process environment.
    pub fn load() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "conf".to_string());
        let config = Config::builder()
            .add_source(File::with_name(&path).required(false))
            .add_source(Environment::default())
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let settings: Settings = config.try_deserialize()?;
        tracing::debug!("Loaded settings (port={})", settings.port);
        Ok(settings)
    }

    pub fn key(&self) -> Option<&str> {
        non_empty(&self.translator_key)
    }

    pub fn endpoint(&self) -> Option<&str> {
        non_empty(&self.translator_endpoint)
    }

    pub fn region(&self) -> Option<&str> {
        non_empty(&self.translator_region)
    }

    /// Names of the credentials the vendor call cannot do without.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.key().is_none() {
            missing.push("TRANSLATOR_KEY");
        }
        if self.endpoint().is_none() {
            missing.push("TRANSLATOR_ENDPOINT");
        }
        missing
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translator_key: None,
            translator_endpoint: None,
            translator_region: None,
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}
