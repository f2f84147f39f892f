use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;
use uuid::Uuid;

use crate::error::ProxyError;
use crate::languages::{source_languages, target_languages};
use crate::state::AppState;
use crate::translate::{TranslateRequest, TranslateResponse};

pub fn create_routes(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/translate", post(translate))
        .route("/api/languages", get(languages))
        .route("/api/health", get(health_check));

    // Optional browser frontend
    if let Some(dir) = &state.settings.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslateResponse>, ProxyError> {
    let job = TranslateRequest::from_body(&body)?;

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        "Translating {} chars: from={}, to={}",
        job.text.chars().count(),
        job.from.as_deref().unwrap_or("auto"),
        job.to
    );

    let translated_text = state.translator.translate(&job).await?;

    info!(%request_id, "Translation complete");
    Ok(Json(TranslateResponse { translated_text }))
}

async fn languages() -> Json<Value> {
    Json(json!({
        "source": source_languages(),
        "target": target_languages(),
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "translator_configured": state.translator.is_configured(),
    }))
}
