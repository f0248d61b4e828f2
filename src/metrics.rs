use axum::{routing::get, Router};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::analyze::scoring::Recommendation;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Fails if a recorder is already installed.
    pub fn init() -> Result<Self, BuildError> {
        let handle = PrometheusBuilder::new().install_recorder()?;
        ensure_metrics_described();
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// One-time metrics registration (so series show up on /metrics).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("moderation_requests_total", "Texts scored by the moderator.");
        describe_counter!(
            "moderation_rejected_input_total",
            "Requests refused before scoring (missing or empty text)."
        );
        describe_counter!(
            "moderation_recommendation_total",
            "Scored texts by recommendation."
        );
        describe_counter!(
            "moderation_sentiment_fallback_total",
            "Texts where sentiment degraded to neutral after a backend failure."
        );
        describe_histogram!(
            "moderation_duration_ms",
            "Time to score one text, in milliseconds."
        );
    });
}

pub(crate) fn record_scored(rec: Recommendation, elapsed_ms: f64) {
    counter!("moderation_requests_total").increment(1);
    counter!("moderation_recommendation_total", "recommendation" => rec.as_str()).increment(1);
    histogram!("moderation_duration_ms").record(elapsed_ms);
}

pub(crate) fn record_rejected_input() {
    counter!("moderation_rejected_input_total").increment(1);
}

pub(crate) fn record_sentiment_fallback() {
    counter!("moderation_sentiment_fallback_total").increment(1);
}
