// tests/metrics.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use content_moderator::metrics::Metrics;
use content_moderator::{app, AppState, ContentModerator};

// One test per binary: the Prometheus recorder is process-global.
#[tokio::test]
async fn metrics_endpoint_contains_expected_series() {
    let metrics = Metrics::init().expect("install prometheus recorder");
    let state = AppState::new(ContentModerator::seed().unwrap());
    let router = app(state, Some(&metrics));

    for text in ["hello there", "", "you idiot, buy now"] {
        let req = Request::post("/moderate")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::json!({ "text": text }).to_string()))
            .unwrap();
        let _ = router.clone().oneshot(req).await.unwrap();
    }

    let resp = router
        .clone()
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    // axum::body::to_bytes requires an explicit limit
    let body = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap(); // 1 MiB
    let text = String::from_utf8(body.to_vec()).unwrap();

    for needle in [
        "moderation_requests_total",
        "moderation_rejected_input_total",
        "moderation_recommendation_total",
        "moderation_duration_ms",
    ] {
        assert!(text.contains(needle), "missing series {needle} in:\n{text}");
    }
    assert!(text.contains("recommendation=\"approve\""), "{text}");
}
