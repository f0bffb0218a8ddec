use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::{info, warn};

use crate::config::MonitorConfig;
use crate::error::InputError;
use crate::input::EvaluationInput;
use crate::metrics::encode_report;
use crate::report::{evaluate, HealthReport};

const OPENMETRICS_CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

pub enum ApiError {
    Input(InputError),
    Encode,
}

impl From<InputError> for ApiError {
    fn from(e: InputError) -> Self {
        ApiError::Input(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Input(e) => {
                warn!("Rejected evaluation: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
            ApiError::Encode => (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics").into_response(),
        }
    }
}

pub fn router(config: Arc<MonitorConfig>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/evaluate", get(evaluate_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(config)
}

async fn evaluate_handler(
    State(config): State<Arc<MonitorConfig>>,
    Query(input): Query<EvaluationInput>,
) -> Result<Json<HealthReport>, ApiError> {
    let report = evaluate(&config, &input.readings(), &input.rates(), input.series)?;
    Ok(Json(report))
}

async fn metrics_handler(
    State(config): State<Arc<MonitorConfig>>,
    Query(input): Query<EvaluationInput>,
) -> Result<Response, ApiError> {
    let report = evaluate(&config, &input.readings(), &input.rates(), false)?;
    let body = encode_report(&report).map_err(|_| ApiError::Encode)?;
    Ok(([(header::CONTENT_TYPE, OPENMETRICS_CONTENT_TYPE)], body).into_response())
}

pub async fn serve(config: Arc<MonitorConfig>, listen: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(config)).await
}
