use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use translate_proxy::client::command::HELP;
use translate_proxy::client::{
    FormCommand, HttpBackend, Speaker, SystemClipboard, SystemSpeaker, TranslateForm,
};
use translate_proxy::languages::{source_languages, target_languages, Language};

fn render(form: &TranslateForm) {
    match form.error() {
        Some(error) => println!("error: {}", error),
        None => println!("{}", form.result()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let base_url = std::env::var("TRANSLATE_API_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    let backend = HttpBackend::new(base_url);
    let clipboard = SystemClipboard;
    let speaker = SystemSpeaker::detect();
    let mut form = TranslateForm::default();

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match FormCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            FormCommand::Translate(text) => {
                form.set_text(text);
                if !form.can_translate() {
                    continue;
                }
                println!("Translating...");
                form.translate(&backend).await;
                render(&form);
            }
            FormCommand::From(code) => match form.set_from(&code) {
                Ok(()) => println!("from: {}", form.from()),
                Err(e) => println!("{}", e),
            },
            FormCommand::To(code) => match form.set_to(&code) {
                Ok(()) => println!("to: {}", form.to()),
                Err(e) => println!("{}", e),
            },
            FormCommand::Languages => {
                println!("source: {}", codes(source_languages()));
                println!("target: {}", codes(target_languages()));
            }
            FormCommand::Clear => form.clear(),
            FormCommand::Copy => {
                if let Err(e) = form.copy(&clipboard) {
                    warn!("Copy failed: {}", e);
                }
            }
            FormCommand::Speak => {
                if let Err(e) = form.speak(&speaker).await {
                    warn!("Speech failed: {}", e);
                }
            }
            FormCommand::Help => println!("{}", HELP),
            FormCommand::Quit => break,
        }
    }

    speaker.cancel().await?;
    Ok(())
}

fn codes(languages: Vec<Language>) -> String {
    languages
        .iter()
        .map(|l| format!("{} ({})", l.code, l.name))
        .collect::<Vec<_>>()
        .join(", ")
}
