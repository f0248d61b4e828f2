// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod analyze;
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod moderator;
pub mod sentiment;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::error::{ApiError, ConfigError, ModerationError, SentimentError};
pub use crate::moderator::{ContentModerator, ModerationResult};

/// Build the full application router: moderation routes plus `/metrics` when a
/// Prometheus handle is supplied.
pub fn app(state: AppState, metrics: Option<&crate::metrics::Metrics>) -> axum::Router {
    let router = api::router(state);
    match metrics {
        Some(m) => router.merge(m.router()),
        None => router,
    }
}
