use clap::Parser;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use common::config::{BackendConfig, Config};

use crate::{
    model::{GenericError, Points, Processible, RecordId},
    scorers::Scorer,
    storage::ScoreStorage,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: String,
}

pub fn initialize_executable() -> Result<Config, GenericError> {
    let args = Args::parse();
    println!("Loading config from: {}", args.config);
    let config = Config::load(&args.config)?;
    println!("Loaded config: {:#?}", config);

    Ok(config)
}

pub fn initialize_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_new(log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<dyn Scorer>,
    pub storage: Arc<dyn ScoreStorage>,
}

impl AppState {
    pub fn new(scorer: Arc<dyn Scorer>, storage: Arc<dyn ScoreStorage>) -> Self {
        Self { scorer, storage }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: RecordId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

pub fn build_router<P>(scorer: Arc<dyn Scorer>, storage: Arc<dyn ScoreStorage>) -> Router
where
    P: Processible + DeserializeOwned + 'static,
{
    let state = AppState::new(scorer, storage);

    Router::new()
        .route("/receipts/process", post(process_receipt::<P>))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn run_backend<P>(
    config: BackendConfig,
    scorer: Arc<dyn Scorer>,
    storage: Arc<dyn ScoreStorage>,
) -> Result<(), GenericError>
where
    P: Processible + DeserializeOwned + 'static,
{
    let app = build_router::<P>(scorer, storage);

    tracing::info!("Starting rewards backend at {}", config.server_address);
    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// Scoring happens before the store lock is ever taken; the store only sees
// the finished total.
pub async fn process_receipt<P>(State(state): State<AppState>, Json(payload): Json<P>) -> Response
where
    P: Processible + DeserializeOwned + 'static,
{
    let features = payload.extract_features();
    let results = state.scorer.score(features).await;
    let points: Points = results.iter().map(|r| r.score).sum();

    for result in &results {
        tracing::debug!(rule = %result.name, score = result.score, "Rule triggered");
    }

    match state.storage.save_score(points).await {
        Ok(id) => {
            tracing::info!(%id, points, "Processed receipt");
            (StatusCode::OK, Json(ProcessResponse { id })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store receipt score");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

pub async fn get_points(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.storage.get_score(&id).await {
        Ok(Some(points)) => (StatusCode::OK, Json(PointsResponse { points })).into_response(),
        Ok(None) => {
            tracing::debug!(%id, "No receipt stored under id");
            (StatusCode::NOT_FOUND, "Receipt not found").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to look up receipt score");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK").into_response()
}
