//! HTTP dashboard server.
//!
//! Serves the borough dashboard's logical actions over JSON: predict a
//! complaint, read the session history, fetch freshly resampled dashboard
//! charts, and render the density map. One server process owns one session;
//! the session state sits behind a mutex so each request is one serialized
//! user action.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::{Html, Json},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use borocast_core::charts;
use borocast_core::{BOROUGH_COUNT, Borough, Classifier, EXAMPLE_COMPLAINTS, SessionState};

/// Shared server state.
struct AppState {
    session: Mutex<SessionState>,
    classifier: Classifier,
}

#[derive(Deserialize)]
struct PredictRequest {
    text: String,
}

#[derive(Serialize)]
struct PredictResponse {
    borough: Borough,
    probabilities: [f64; BOROUGH_COUNT],
    /// History length after this prediction (equals the heatmap point count).
    history_len: usize,
    success: bool,
}

#[derive(Serialize)]
struct HistoryResponse {
    records: Vec<borocast_core::PredictionRecord>,
    total: usize,
}

#[derive(Serialize)]
struct DashboardResponse {
    counts: [u64; BOROUGH_COUNT],
    pie: charts::PieChart,
    bars: charts::BarChart,
}

#[derive(Serialize)]
struct ClearResponse {
    success: bool,
    cleared_points: usize,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    session_id: String,
    predictions: usize,
    heatmap_points: usize,
    map_cache_valid: bool,
}

async fn handle_predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Json<PredictResponse> {
    let mut session = state.session.lock().await;
    let prediction = state.classifier.predict(&request.text);
    session.record_prediction(&request.text, &prediction);

    Json(PredictResponse {
        borough: prediction.borough,
        probabilities: prediction.probabilities,
        history_len: session.history().len(),
        success: true,
    })
}

async fn handle_history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    let session = state.session.lock().await;
    let records = session.history().to_vec();
    let total = records.len();
    Json(HistoryResponse { records, total })
}

async fn handle_dashboard(State(_state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    // Mock aggregates: independently resampled on every dashboard view.
    let counts = charts::mock_complaint_counts(&mut rand::rng());
    Json(DashboardResponse {
        pie: charts::complaint_pie(&counts),
        bars: charts::complaint_bars(&counts),
        counts,
    })
}

async fn handle_map(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut session = state.session.lock().await;
    if session.heatmap().is_empty() {
        return Html(
            "<p>No heatmap data yet — make a prediction to populate the map.</p>".to_string(),
        );
    }
    Html(session.heatmap_mut().render().to_string())
}

async fn handle_clear(State(state): State<Arc<AppState>>) -> Json<ClearResponse> {
    let mut session = state.session.lock().await;
    let cleared_points = session.heatmap().point_count();
    session.heatmap_mut().clear();
    Json(ClearResponse {
        success: true,
        cleared_points,
    })
}

async fn handle_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let session = state.session.lock().await;
    Json(HealthResponse {
        status: "healthy".to_string(),
        session_id: session.id().to_string(),
        predictions: session.prediction_count(),
        heatmap_points: session.heatmap().point_count(),
        map_cache_valid: session.heatmap().cache_valid(),
    })
}

async fn handle_index(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let manifest = state.classifier.manifest();
    Json(serde_json::json!({
        "name": "Borocast Server",
        "version": borocast_core::VERSION,
        "model": {
            "name": manifest.name,
            "architecture": manifest.architecture,
            "labels": manifest.labels,
        },
        "endpoints": {
            "/": "This API index",
            "/api/v1/predict": {
                "method": "POST",
                "description": "Predict the borough for a complaint",
                "body": { "text": "Complaint description (free text)" }
            },
            "/api/v1/history": "Ordered prediction history for this session",
            "/api/v1/dashboard": "Mock aggregate charts (resampled per request)",
            "/api/v1/map": "Density map document (HTML)",
            "/api/v1/heatmap/clear": { "method": "POST", "description": "Drop all heatmap points" },
            "/health": "Session health check",
        },
        "examples": EXAMPLE_COMPLAINTS,
    }))
}

/// Build the axum router.
fn build_router(classifier: Classifier) -> Router {
    let state = Arc::new(AppState {
        session: Mutex::new(SessionState::new()),
        classifier,
    });

    Router::new()
        .route("/", get(handle_index))
        .route("/api/v1/predict", post(handle_predict))
        .route("/api/v1/history", get(handle_history))
        .route("/api/v1/dashboard", get(handle_dashboard))
        .route("/api/v1/map", get(handle_map))
        .route("/api/v1/heatmap/clear", post(handle_clear))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Run the HTTP dashboard server.
pub async fn run_server(classifier: Classifier, host: &str, port: u16) {
    let app = build_router(classifier);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    log::info!("dashboard server listening on {addr}");
    axum::serve(listener, app).await.unwrap();
}
