//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tokio::time::timeout;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::common::format::format_usd;
use crate::config::{Config, SUPPORTED_TIMEFRAMES};
use crate::metrics::Metrics;
use crate::models::{AnalysisError, AnalysisResult};
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use crate::signals::engine::{AnalysisEngine, MIN_CANDLES};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub config: Arc<Config>,
    pub market_data: Arc<dyn MarketDataProvider>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "candlesage-signal-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    pair: Option<String>,
    timeframe: Option<String>,
}

type ErrorResponse = (StatusCode, Json<Value>);

fn analysis_error_response(err: &AnalysisError) -> ErrorResponse {
    match err {
        AnalysisError::InvalidPair(_) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        ),
        AnalysisError::InsufficientData { .. } | AnalysisError::UpstreamUnavailable(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Analysis failed", "details": err.to_string() })),
        ),
    }
}

fn analysis_response(result: &AnalysisResult) -> Value {
    json!({
        "pair": result.pair,
        "timeframe": result.timeframe,
        "signal": result.signal,
        "confidence": result.confidence,
        "last_price": result.last_price,
        "last_price_display": format_usd(result.last_price),
        "price_change_24h": result.price_change_24h,
        "indicators": {
            "rsi": result.snapshot.rsi,
            "ema_short": result.snapshot.ema_short,
            "ema_long": result.snapshot.ema_long,
            "stoch_k": result.snapshot.stoch_k,
            "stoch_d": result.snapshot.stoch_d,
            "macd": result.snapshot.macd,
            "macd_signal": result.snapshot.macd_signal,
        },
        "votes": result.indicators,
        "timestamp": result.timestamp,
        "reason": result.reason,
    })
}

/// Analyze one trading pair.
///
/// The market-data fetch is the only suspension point of the request and
/// runs under the configured timeout; a timeout or fetch failure aborts the
/// whole analysis with no partial result.
async fn analyze_pair(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    let pair = request
        .pair
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_uppercase();
    if pair.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Trading pair is required" })),
        ));
    }
    if !pair.bytes().all(|b| b.is_ascii_alphanumeric()) {
        let err = AnalysisError::InvalidPair(pair);
        return Err(analysis_error_response(&err));
    }

    let timeframe = request
        .timeframe
        .unwrap_or_else(|| state.config.default_timeframe.clone());

    let fetch_budget = state.config.market_data_timeout;
    let candles = timeout(
        fetch_budget,
        state.market_data.get_candles(&pair, &timeframe, MIN_CANDLES),
    )
    .await
    .map_err(|_| AnalysisError::UpstreamUnavailable("market data fetch timed out".to_string()))
    .and_then(|fetched| fetched.map_err(|e| market_data_error(&pair, e)))
    .map_err(|err| {
        state.metrics.analysis_failures_total.inc();
        error!(pair = %pair, error = %err, "Candle fetch failed");
        analysis_error_response(&err)
    })?;

    // A missing 24h change only disables the confidence penalty; it never
    // aborts the analysis.
    let price_change_24h = timeout(fetch_budget, state.market_data.get_price_change_24h(&pair))
        .await
        .ok()
        .and_then(|fetched| fetched.ok())
        .flatten();

    match AnalysisEngine::analyze(&pair, &timeframe, &candles, price_change_24h) {
        Ok(result) => {
            state.metrics.analyses_total.inc();
            info!(
                pair = %result.pair,
                signal = %result.signal,
                confidence = result.confidence,
                "Analysis completed"
            );
            Ok(Json(analysis_response(&result)))
        }
        Err(err) => {
            state.metrics.analysis_failures_total.inc();
            error!(pair = %pair, error = %err, "Analysis failed");
            Err(analysis_error_response(&err))
        }
    }
}

fn market_data_error(pair: &str, err: MarketDataError) -> AnalysisError {
    match err {
        MarketDataError::NotFound(_) => AnalysisError::InvalidPair(pair.to_string()),
        other => AnalysisError::UpstreamUnavailable(other.to_string()),
    }
}

/// List supported trading pairs and timeframes
async fn list_pairs(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "pairs": state.config.supported_pairs,
        "supported_timeframes": SUPPORTED_TIMEFRAMES,
        "default_timeframe": state.config.default_timeframe,
    }))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/analyze", post(analyze_pair))
        .route("/api/pairs", get(list_pairs))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    config: Config,
    market_data: Arc<dyn MarketDataProvider>,
) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());
    let port = config.port;

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time,
        config: Arc::new(config),
        market_data,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
