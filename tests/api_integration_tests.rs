//! Integration Tests for API Endpoints
//!
//! Drives the proxy router end to end against a local mock upstream.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::Path,
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use dl_cache_proxy::{
    api::create_router, cache::CacheStore, models::TimeFormat, upstream::UpstreamClient, AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

/// Mock upstream: counts calls and answers per id.
async fn spawn_upstream() -> (String, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let app = Router::new().route(
        "/dl/:id",
        get(move |Path(id): Path<String>| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                match id.as_str() {
                    "zzz" => (StatusCode::NOT_FOUND, r#"{"message":"not found"}"#.to_string()),
                    "unavailable" => (StatusCode::SERVICE_UNAVAILABLE, "<h1>503</h1>".to_string()),
                    "abc123" => (StatusCode::OK, r#"{"title":"x"}"#.to_string()),
                    other => (StatusCode::OK, format!(r#"{{"id":"{other}"}}"#)),
                }
                .into_response()
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/dl/"), calls)
}

/// Base URL on a loopback port that was just released, so connections are
/// refused immediately.
fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/dl/")
}

fn create_test_app(base_url: &str, max_entries: usize, ttl: Duration) -> Router {
    let state = AppState::new(CacheStore::new(max_entries, ttl), UpstreamClient::new(base_url));
    create_router(state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// == Lookup Endpoint Tests ==

#[tokio::test]
async fn test_second_lookup_served_from_cache() {
    let (base, calls) = spawn_upstream().await;
    let app = create_test_app(&base, 500, Duration::from_secs(3600));

    let (status, first) = get_json(&app, "/dl/abc123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, json!({ "title": "x" }));

    let (status, second) = get_json(&app, "/dl/abc123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let (_, listing) = get_json(&app, "/api/cache").await;
    assert_eq!(listing["totalCachedItems"], 1);
    assert_eq!(listing["cacheDetails"][0]["videoid"], "abc123");
}

#[tokio::test]
async fn test_upstream_404_forwarded_and_not_cached() {
    let (base, _) = spawn_upstream().await;
    let app = create_test_app(&base, 500, Duration::from_secs(3600));

    let (status, body) = get_json(&app, "/dl/zzz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "not found" }));

    let (_, listing) = get_json(&app, "/api/cache").await;
    assert_eq!(listing, json!({ "totalCachedItems": 0, "cacheDetails": [] }));
}

#[tokio::test]
async fn test_upstream_non_json_error_substituted() {
    let (base, _) = spawn_upstream().await;
    let app = create_test_app(&base, 500, Duration::from_secs(3600));

    let (status, body) = get_json(&app, "/dl/unavailable").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "message": "External API error" }));
}

#[tokio::test]
async fn test_transport_failure_is_internal_error() {
    let app = create_test_app(&unreachable_base_url(), 500, Duration::from_secs(3600));

    let (status, body) = get_json(&app, "/dl/abc123").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}

#[tokio::test]
async fn test_expired_entry_refetched() {
    let (base, calls) = spawn_upstream().await;
    let app = create_test_app(&base, 500, Duration::from_millis(100));

    get_json(&app, "/dl/abc123").await;
    tokio::time::sleep(Duration::from_millis(150)).await;
    let (status, _) = get_json(&app, "/dl/abc123").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_capacity_evicts_first_inserted() {
    let (base, calls) = spawn_upstream().await;
    let app = create_test_app(&base, 2, Duration::from_secs(3600));

    get_json(&app, "/dl/one").await;
    get_json(&app, "/dl/two").await;
    // A read does not protect "one" from eviction
    get_json(&app, "/dl/one").await;
    get_json(&app, "/dl/three").await;
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    let (_, listing) = get_json(&app, "/api/cache").await;
    let ids: Vec<&str> = listing["cacheDetails"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["videoid"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["three", "two"]);

    get_json(&app, "/dl/one").await;
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

// == Cache Listing Tests ==

#[tokio::test]
async fn test_cache_listing_remaining_time() {
    let (base, _) = spawn_upstream().await;
    let app = create_test_app(&base, 500, Duration::from_secs(3600));

    get_json(&app, "/dl/abc123").await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    let (status, listing) = get_json(&app, "/api/cache").await;

    assert_eq!(status, StatusCode::OK);
    let detail = &listing["cacheDetails"][0];
    let remaining_ms = detail["remainingTTL_ms"].as_u64().unwrap();
    assert!(remaining_ms <= 3_599_990);
    assert!(remaining_ms > 3_590_000);
    assert_eq!(detail["remainingTime"], "60分 0秒");
}

#[tokio::test]
async fn test_cache_listing_hours_variant() {
    let (base, _) = spawn_upstream().await;
    let state = AppState::new(
        CacheStore::new(500, Duration::from_secs(4 * 3600)),
        UpstreamClient::new(base),
    )
    .with_time_format(TimeFormat::HoursMinutesSeconds);
    let app = create_router(state);

    get_json(&app, "/dl/abc123").await;
    let (_, listing) = get_json(&app, "/api/cache").await;

    assert_eq!(listing["cacheDetails"][0]["remainingTime"], "4時間 0分 0秒");
}

#[tokio::test]
async fn test_cache_listing_omits_expired_entries() {
    let (base, _) = spawn_upstream().await;
    let state = AppState::new(
        CacheStore::new(500, Duration::from_millis(50)),
        UpstreamClient::new(base),
    );
    let cache = state.cache.clone();
    let app = create_router(state);

    get_json(&app, "/dl/abc123").await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    let (_, listing) = get_json(&app, "/api/cache").await;
    assert_eq!(listing["totalCachedItems"], 0);
    assert_eq!(cache.read().await.keys(), vec!["abc123".to_string()]);
}

// == Health Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(&unreachable_base_url(), 500, Duration::from_secs(3600));

    let response = tokio_test::assert_ok!(
        app.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
    );

    assert_eq!(response.status(), StatusCode::OK);
}
