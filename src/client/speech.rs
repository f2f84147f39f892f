use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

/// Text-to-speech capability. Optional: callers check `is_available` first.
#[async_trait]
pub trait Speaker: Send + Sync {
    fn is_available(&self) -> bool;

    /// Stop whatever is currently being spoken.
    async fn cancel(&self) -> Result<()>;

    /// Start speaking `text`, using `locale` as a voice hint.
    async fn speak(&self, text: &str, locale: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechProgram {
    Say(PathBuf),
    Espeak(PathBuf),
}

impl SpeechProgram {
    fn command(&self, text: &str, locale: &str) -> Command {
        match self {
            // `say` picks voices by name, not locale
            SpeechProgram::Say(path) => {
                let mut cmd = Command::new(path);
                cmd.arg(text);
                cmd
            }
            SpeechProgram::Espeak(path) => {
                let mut cmd = Command::new(path);
                cmd.arg("-v").arg(espeak_voice(locale)).arg(text);
                cmd
            }
        }
    }
}

/// espeak voices are keyed by lower-case primary language subtag.
fn espeak_voice(locale: &str) -> String {
    locale
        .split('-')
        .next()
        .unwrap_or(locale)
        .to_lowercase()
}

fn find_on_path(name: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// A running speech process. The waiter task owns the child and reaps it,
/// killing it first if `stop` fires or is dropped.
struct Utterance {
    stop: oneshot::Sender<()>,
    waiter: JoinHandle<()>,
}

/// Speaks through whichever platform speech command is installed.
pub struct SystemSpeaker {
    program: Option<SpeechProgram>,
    current: Mutex<Option<Utterance>>,
}

impl SystemSpeaker {
    pub fn detect() -> Self {
        let program = find_on_path("say")
            .map(SpeechProgram::Say)
            .or_else(|| find_on_path("espeak-ng").map(SpeechProgram::Espeak))
            .or_else(|| find_on_path("espeak").map(SpeechProgram::Espeak));
        debug!("Speech program: {:?}", program);
        Self::with_program(program)
    }

    pub fn with_program(program: Option<SpeechProgram>) -> Self {
        Self {
            program,
            current: Mutex::new(None),
        }
    }

    pub async fn is_speaking(&self) -> bool {
        self.current
            .lock()
            .await
            .as_ref()
            .is_some_and(|u| !u.waiter.is_finished())
    }
}

#[async_trait]
impl Speaker for SystemSpeaker {
    fn is_available(&self) -> bool {
        self.program.is_some()
    }

    async fn cancel(&self) -> Result<()> {
        if let Some(utterance) = self.current.lock().await.take() {
            // Fails only when the process already finished
            let _ = utterance.stop.send(());
            if let Err(e) = utterance.waiter.await {
                debug!("Speech waiter ended abnormally: {}", e);
            }
        }
        Ok(())
    }

    async fn speak(&self, text: &str, locale: &str) -> Result<()> {
        let program = self
            .program
            .as_ref()
            .ok_or_else(|| anyhow!("No speech synthesizer available"))?;

        let mut child = program.command(text, locale).kill_on_drop(true).spawn()?;
        let (stop, stopped) = oneshot::channel::<()>();
        let waiter = tokio::spawn(async move {
            let interrupted = tokio::select! {
                status = child.wait() => {
                    debug!("Speech finished: {:?}", status);
                    false
                }
                _ = stopped => true,
            };
            if interrupted {
                if let Err(e) = child.kill().await {
                    debug!("Speech process already gone: {}", e);
                }
            }
        });

        *self.current.lock().await = Some(Utterance { stop, waiter });
        Ok(())
    }
}
