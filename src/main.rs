use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use translate_proxy::routes;
use translate_proxy::settings::Settings;
use translate_proxy::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be populated
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translate_proxy=debug,tower_http=debug")),
        )
        .init();

    let settings = Settings::load()?;

    let missing = settings.missing_credentials();
    if !missing.is_empty() {
        warn!(
            "{} not set. The translate endpoint will fail without them.",
            missing.join(" and ")
        );
    }

    let (host, port) = (settings.host.clone(), settings.port);
    let app = routes::create_routes(AppState::new(settings));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Translation backend listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
