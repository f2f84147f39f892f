use std::sync::Arc;

use crate::settings::Settings;
use crate::translate::{AzureTranslator, Translator};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let translator = Arc::new(AzureTranslator::from_settings(&settings));
        Self::with_translator(settings, translator)
    }

    pub fn with_translator(settings: Settings, translator: Arc<dyn Translator>) -> Self {
        Self {
            settings: Arc::new(settings),
            translator,
        }
    }
}
