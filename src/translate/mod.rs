pub mod azure;
pub mod interface;

pub use azure::AzureTranslator;
pub use interface::{TranslateRequest, TranslateResponse, TranslationJob, Translator};
