use anyhow::Result;

use super::backend::{ClientError, TranslateBackend};
use super::clipboard::Clipboard;
use super::speech::Speaker;
use crate::languages::{find, is_auto_detect, speech_locale, AUTO_DETECT};
use crate::translate::TranslateRequest;

/// UI state of the translation form.
///
/// Goes idle -> loading -> (result | error). At most one of `result` and
/// `error` is set once a translation finishes.
#[derive(Debug, Clone)]
pub struct TranslateForm {
    text: String,
    from: String,
    to: String,
    result: String,
    loading: bool,
    error: Option<String>,
}

impl Default for TranslateForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            from: AUTO_DETECT.to_string(),
            to: "fr".to_string(),
            result: String::new(),
            loading: false,
            error: None,
        }
    }
}

impl TranslateForm {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_from(&mut self, code: &str) -> Result<(), ClientError> {
        let language = find(code).ok_or_else(|| ClientError::UnknownLanguage(code.to_string()))?;
        self.from = language.code.to_string();
        Ok(())
    }

    pub fn set_to(&mut self, code: &str) -> Result<(), ClientError> {
        if is_auto_detect(code) {
            return Err(ClientError::AutoDetectTarget);
        }
        let language = find(code).ok_or_else(|| ClientError::UnknownLanguage(code.to_string()))?;
        self.to = language.code.to_string();
        Ok(())
    }

    pub fn can_translate(&self) -> bool {
        !self.text.trim().is_empty() && !self.loading
    }

    /// Enter the loading state. Returns `None` when translating is not
    /// allowed right now.
    pub fn begin_translate(&mut self) -> Option<TranslateRequest> {
        if !self.can_translate() {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.result.clear();
        Some(TranslateRequest::new(
            self.text.clone(),
            self.from.clone(),
            self.to.clone(),
        ))
    }

    pub fn finish(&mut self, outcome: Result<String, ClientError>) {
        match outcome {
            Ok(translated) => self.result = translated,
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    /// Returns whether a request was issued.
    pub async fn translate(&mut self, backend: &dyn TranslateBackend) -> bool {
        let Some(request) = self.begin_translate() else {
            return false;
        };
        let outcome = backend.translate(&request).await;
        self.finish(outcome);
        true
    }

    /// Resets text and result. Any error shown is dismissed too.
    pub fn clear(&mut self) {
        self.text.clear();
        self.result.clear();
        self.error = None;
    }

    /// Returns whether anything was copied.
    pub fn copy(&self, clipboard: &dyn Clipboard) -> Result<bool> {
        if self.result.is_empty() {
            return Ok(false);
        }
        clipboard.write_text(&self.result)?;
        Ok(true)
    }

    /// Returns whether speech was started.
    pub async fn speak(&self, speaker: &dyn Speaker) -> Result<bool> {
        if self.result.is_empty() || !speaker.is_available() {
            return Ok(false);
        }
        speaker.cancel().await?;
        speaker.speak(&self.result, speech_locale(&self.to)).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubBackend {
        reply: Result<&'static str, u16>,
        requests: Mutex<Vec<TranslateRequest>>,
    }

    impl StubBackend {
        fn new(reply: Result<&'static str, u16>) -> Self {
            Self {
                reply,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TranslateBackend for StubBackend {
        async fn translate(&self, request: &TranslateRequest) -> Result<String, ClientError> {
            self.requests.lock().unwrap().push(request.clone());
            self.reply
                .map(str::to_string)
                .map_err(ClientError::Status)
        }
    }

    #[derive(Default)]
    struct StubClipboard {
        written: Mutex<Vec<String>>,
    }

    impl Clipboard for StubClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct StubSpeaker {
        available: bool,
        calls: Mutex<Vec<String>>,
    }

    impl StubSpeaker {
        fn new(available: bool) -> Self {
            Self {
                available,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Speaker for StubSpeaker {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn cancel(&self) -> Result<()> {
            self.calls.lock().unwrap().push("cancel".to_string());
            Ok(())
        }

        async fn speak(&self, text: &str, locale: &str) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("speak {} ({})", text, locale));
            Ok(())
        }
    }

    async fn translated(text: &str, reply: Result<&'static str, u16>) -> TranslateForm {
        let mut form = TranslateForm::default();
        form.set_text(text);
        assert!(form.translate(&StubBackend::new(reply)).await);
        form
    }

    #[tokio::test]
    async fn hello_becomes_bonjour() {
        let backend = StubBackend::new(Ok("bonjour"));
        let mut form = TranslateForm::default();
        form.set_text("hello");

        assert!(form.translate(&backend).await);
        assert_eq!(form.result(), "bonjour");
        assert_eq!(form.error(), None);
        assert!(!form.is_loading());

        let requests = backend.requests.lock().unwrap();
        assert_eq!(requests[0].text.as_deref(), Some("hello"));
        assert_eq!(requests[0].from.as_deref(), Some("auto"));
        assert_eq!(requests[0].to.as_deref(), Some("fr"));
    }

    #[tokio::test]
    async fn failure_sets_error_only() {
        let form = translated("hello", Err(502)).await;
        assert_eq!(form.result(), "");
        assert_eq!(form.error(), Some("HTTP 502"));
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn new_attempt_replaces_previous_outcome() {
        let mut form = translated("hello", Err(500)).await;
        assert!(form.translate(&StubBackend::new(Ok("hola"))).await);
        assert_eq!(form.result(), "hola");
        assert_eq!(form.error(), None);

        assert!(form.translate(&StubBackend::new(Err(503))).await);
        assert_eq!(form.result(), "");
        assert_eq!(form.error(), Some("HTTP 503"));
    }

    #[tokio::test]
    async fn blank_text_is_not_sent() {
        let backend = StubBackend::new(Ok("unused"));
        let mut form = TranslateForm::default();
        assert!(!form.translate(&backend).await);

        form.set_text("   \n");
        assert!(!form.can_translate());
        assert!(!form.translate(&backend).await);
        assert!(backend.requests.lock().unwrap().is_empty());
    }

    #[test]
    fn loading_blocks_a_second_request() {
        let mut form = TranslateForm::default();
        form.set_text("hello");

        assert!(form.begin_translate().is_some());
        assert!(form.is_loading());
        assert!(form.begin_translate().is_none());

        form.finish(Ok("bonjour".to_string()));
        assert!(!form.is_loading());
        assert!(form.can_translate());
    }

    #[tokio::test]
    async fn clear_resets_text_result_and_error() {
        let mut form = translated("hello", Ok("bonjour")).await;
        form.clear();
        assert_eq!(form.text(), "");
        assert_eq!(form.result(), "");

        let mut form = translated("hello", Err(500)).await;
        form.clear();
        assert_eq!(form.text(), "");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn target_rejects_auto_and_unknown_codes() {
        let mut form = TranslateForm::default();
        assert!(matches!(form.set_to("auto"), Err(ClientError::AutoDetectTarget)));
        assert!(matches!(form.set_to("xx"), Err(ClientError::UnknownLanguage(_))));
        assert_eq!(form.to(), "fr");

        form.set_to("de").unwrap();
        form.set_from("en").unwrap();
        assert_eq!((form.from(), form.to()), ("en", "de"));
        form.set_from("auto").unwrap();
        assert_eq!(form.from(), "auto");
    }

    #[tokio::test]
    async fn copy_writes_only_existing_results() {
        let clipboard = StubClipboard::default();
        assert!(!TranslateForm::default().copy(&clipboard).unwrap());

        let form = translated("hello", Ok("bonjour")).await;
        assert!(form.copy(&clipboard).unwrap());
        assert_eq!(*clipboard.written.lock().unwrap(), vec!["bonjour".to_string()]);
    }

    #[tokio::test]
    async fn speak_cancels_then_uses_target_locale() {
        let mut form = TranslateForm::default();
        form.set_to("es").unwrap();
        form.set_text("hello");
        form.translate(&StubBackend::new(Ok("hola"))).await;

        let speaker = StubSpeaker::new(true);
        assert!(form.speak(&speaker).await.unwrap());
        assert_eq!(
            *speaker.calls.lock().unwrap(),
            vec!["cancel".to_string(), "speak hola (es)".to_string()]
        );
    }

    #[tokio::test]
    async fn speak_is_a_no_op_without_result_or_capability() {
        let speaker = StubSpeaker::new(true);
        assert!(!TranslateForm::default().speak(&speaker).await.unwrap());
        assert!(speaker.calls.lock().unwrap().is_empty());

        let form = translated("hello", Ok("bonjour")).await;
        let muted = StubSpeaker::new(false);
        assert!(!form.speak(&muted).await.unwrap());
        assert!(muted.calls.lock().unwrap().is_empty());
    }
}
