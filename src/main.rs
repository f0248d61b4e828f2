//! Content Moderator — Binary Entrypoint
//! Boots the Axum HTTP server, wiring the moderator, metrics and middleware.

use content_moderator::{app, logging, metrics::Metrics, AppState};
use shuttle_axum::ShuttleAxum;
use tracing::{info, warn};

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    // This enables MODERATION_CONFIG_PATH / RUST_LOG / LOG_FORMAT from .env.
    let _ = dotenvy::dotenv();

    logging::init_tracing();

    // Word lists and patterns are compiled here; a bad config stops startup.
    let state = AppState::from_env().map_err(anyhow::Error::from)?;

    let metrics = match Metrics::init() {
        Ok(m) => Some(m),
        Err(e) => {
            warn!(error = %e, "prometheus recorder not installed, /metrics disabled");
            None
        }
    };

    info!(
        metrics = metrics.is_some(),
        sentiment_failure_policy = ?state.moderator.sentiment_failure_policy(),
        "content moderator ready"
    );

    Ok(app(state, metrics.as_ref()).into())
}
