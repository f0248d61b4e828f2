use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::config::ModerationConfig;
use crate::error::{ApiError, ConfigError};
use crate::metrics;
use crate::moderator::{ContentModerator, ModerationResult};

pub const SERVICE_NAME: &str = "content-moderator";

#[derive(Clone)]
pub struct AppState {
    pub moderator: Arc<ContentModerator>,
}

impl AppState {
    pub fn new(moderator: ContentModerator) -> Self {
        Self {
            moderator: Arc::new(moderator),
        }
    }

    /// Load word lists and patterns via `MODERATION_CONFIG_PATH` (or the seed).
    pub fn from_env() -> Result<Self, ConfigError> {
        let cfg = ModerationConfig::from_env()?;
        Ok(Self::new(ContentModerator::from_config(&cfg)?))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/moderate", post(moderate))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct ModerateReq {
    /// Kept as raw JSON so an absent key (`None`) and `null` can be told apart.
    #[serde(default, deserialize_with = "present")]
    text: Option<Value>,
}

fn present<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(d).map(Some)
}

async fn index() -> Json<Value> {
    Json(json!({
        "service": "AI Content Moderator API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/moderate": "POST - Moderate content",
            "/health": "GET - Health check"
        }
    }))
}

async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "service": SERVICE_NAME })),
    )
}

async fn moderate(
    State(state): State<AppState>,
    payload: Result<Json<ModerateReq>, JsonRejection>,
) -> Result<Json<ModerationResult>, ApiError> {
    let Json(body) = payload.map_err(|e| {
        metrics::record_rejected_input();
        ApiError::InvalidBody(e.body_text())
    })?;
    // `null` is treated as empty text; any other non-string is a malformed body.
    let text = match body.text {
        None => {
            metrics::record_rejected_input();
            return Err(ApiError::MissingText);
        }
        Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => {
            metrics::record_rejected_input();
            return Err(ApiError::InvalidBody(format!(
                "`text` must be a string, got {other}"
            )));
        }
    };

    let result = state.moderator.moderate(&text)?;
    Ok(Json(result))
}
