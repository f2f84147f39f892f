use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Errors produced while serving `/api/translate`.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("No text provided.")]
    MissingText,

    #[error("No target language provided.")]
    MissingTarget,

    /// Body is not JSON, or `from`/`to` are not strings.
    #[error("Invalid request body.")]
    InvalidBody(#[from] serde_json::Error),

    /// Non-success status from the vendor, passed through untouched.
    #[error("Translation API error")]
    Upstream { status: u16, details: String },

    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingText | ProxyError::MissingTarget | ProxyError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ProxyError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ProxyError::MissingText | ProxyError::MissingTarget => ErrorBody {
                error: self.to_string(),
                details: None,
            },
            ProxyError::InvalidBody(e) => ErrorBody {
                error: self.to_string(),
                details: Some(e.to_string()),
            },
            ProxyError::Upstream { details, .. } => ErrorBody {
                error: self.to_string(),
                details: Some(details.clone()),
            },
            other => ErrorBody {
                error: "Server error".to_string(),
                details: Some(other.to_string()),
            },
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Unexpected failure while translating: {}", self);
        }
        (status, Json(self.body())).into_response()
    }
}
