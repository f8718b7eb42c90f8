//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics, and the analysis flow
//! against a deterministic in-memory market-data provider.


use candlesage::services::market_data::{MarketDataError, PlaceholderMarketDataProvider};
use serde_json::{json, Value};

use test_utils::{candles_from_closes, oversold_candles, StaticMarketDataProvider, TestApiServer};

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new(PlaceholderMarketDataProvider).await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "candlesage-signal-engine");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new(PlaceholderMarketDataProvider).await;
    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("http_request_duration_seconds"),
        "Expected http_request_duration_seconds metric"
    );
    assert!(
        body.contains("http_requests_in_flight"),
        "Expected http_requests_in_flight metric"
    );
}

#[tokio::test]
async fn metrics_track_completed_analyses() {
    let provider = StaticMarketDataProvider::with_candles(oversold_candles());
    let app = TestApiServer::new(provider).await;

    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "pair": "BTCUSDT" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body = app.server.get("/metrics").await.text();
    assert!(body.contains("analyses_total"), "Expected analyses_total metric");
}

#[tokio::test]
async fn analyze_returns_signal_for_valid_pair() {
    let provider =
        StaticMarketDataProvider::with_candles(oversold_candles()).with_price_change(5.0);
    let app = TestApiServer::new(provider).await;

    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "pair": "BTCUSDT", "timeframe": "15m" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["pair"], "BTCUSDT");
    assert_eq!(body["timeframe"], "15m");
    assert_eq!(body["signal"], "BUY");
    assert_eq!(body["confidence"], 60);
    assert_eq!(body["last_price"].as_f64(), Some(80.0));
    assert_eq!(body["last_price_display"], "$80.0000");
    assert_eq!(body["price_change_24h"].as_f64(), Some(5.0));
    assert!(body["timestamp"].as_str().is_some());
    assert!(body["reason"].as_str().unwrap().starts_with("Strong bullish"));

    let indicators = &body["indicators"];
    for field in [
        "rsi",
        "ema_short",
        "ema_long",
        "stoch_k",
        "stoch_d",
        "macd",
        "macd_signal",
    ] {
        assert!(
            indicators[field].as_f64().is_some(),
            "Expected numeric indicator field {}",
            field
        );
    }

    assert_eq!(body["votes"].as_array().map(|v| v.len()), Some(5));
}

#[tokio::test]
async fn analyze_applies_disagreement_penalty() {
    let provider =
        StaticMarketDataProvider::with_candles(oversold_candles()).with_price_change(-5.0);
    let app = TestApiServer::new(provider).await;

    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "pair": "BTCUSDT" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["signal"], "BUY");
    assert_eq!(body["confidence"], 50);
}

#[tokio::test]
async fn analyze_defaults_timeframe_to_15m() {
    let provider = StaticMarketDataProvider::with_candles(oversold_candles());
    let app = TestApiServer::new(provider).await;

    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "pair": "ethusdt" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["pair"], "ETHUSDT");
    assert_eq!(body["timeframe"], "15m");
}

#[tokio::test]
async fn analyze_missing_pair_is_bad_request() {
    let app = TestApiServer::new(PlaceholderMarketDataProvider).await;

    let response = app.server.post("/api/analyze").json(&json!({})).await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"], "Trading pair is required");
}

#[tokio::test]
async fn analyze_malformed_pair_is_bad_request() {
    let app = TestApiServer::new(PlaceholderMarketDataProvider).await;

    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "pair": "BTC/USDT!" }))
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("invalid trading pair"));
}

#[tokio::test]
async fn analyze_insufficient_candles_is_server_error() {
    let provider = StaticMarketDataProvider::with_candles(candles_from_closes(&vec![100.0; 20]));
    let app = TestApiServer::new(provider).await;

    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "pair": "BTCUSDT" }))
        .await;
    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert_eq!(body["error"], "Analysis failed");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("insufficient candle data"));
}

#[tokio::test]
async fn analyze_unknown_pair_is_bad_request() {
    let provider =
        StaticMarketDataProvider::failing(MarketDataError::NotFound("NOPEUSDT".to_string()));
    let app = TestApiServer::new(provider).await;

    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "pair": "NOPEUSDT" }))
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("NOPEUSDT"));
}

#[tokio::test]
async fn analyze_rate_limited_upstream_is_server_error() {
    let provider = StaticMarketDataProvider::failing(MarketDataError::RateLimited);
    let app = TestApiServer::new(provider).await;

    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "pair": "BTCUSDT" }))
        .await;
    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert_eq!(body["error"], "Analysis failed");
    assert!(body["details"].as_str().unwrap().contains("rate limited"));
}

#[tokio::test]
async fn pairs_endpoint_lists_supported_pairs() {
    let app = TestApiServer::new(PlaceholderMarketDataProvider).await;

    let response = app.server.get("/api/pairs").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let pairs = body["pairs"].as_array().unwrap();
    assert!(!pairs.is_empty());
    assert!(pairs.iter().any(|p| p == "BTCUSDT"));
    assert_eq!(body["supported_timeframes"], json!(["15m"]));
    assert_eq!(body["default_timeframe"], "15m");
}
