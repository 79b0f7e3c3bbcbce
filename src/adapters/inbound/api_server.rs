//! FizzBuzz API Server
//!
//! HTTP API exposing the fizzbuzz computation and request statistics.
//! Only GET is served; every response uses the same JSON envelope.

use crate::application::{FizzBuzzService, ServiceError};
use crate::domain::entities::{FizzBuzzRequest, MetricsEntry};
use crate::domain::ports::MetricsError;
use crate::infrastructure::ShutdownController;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Message returned by /metrics before any request was recorded.
pub const NO_METRICS_MESSAGE: &str = "no metrics found, start making requests and come back";

/// Response envelope shared by every endpoint.
///
/// `message` is omitted when empty and `data` when absent.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            message: String::new(),
            data: Some(data),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

/// Payload of /metrics.
#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    #[serde(rename = "topHit")]
    pub top_hit: MetricsEntry,
}

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub tracked_requests: usize,
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("only the http method GET is accepted")]
    MethodNotAllowed,

    #[error("missing required parameter {0}")]
    MissingParameter(&'static str),

    #[error("error parsing {0}")]
    InvalidParameter(&'static str),

    #[error("no route for this path")]
    NotFound,

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MissingParameter(_)
            | ApiError::InvalidParameter(_)
            | ApiError::Service(ServiceError::LimitTooLarge { .. }) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::<()>::message(self.to_string()));
        (self.status(), body).into_response()
    }
}

/// API Server state.
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<FizzBuzzService>,
}

impl ApiState {
    pub fn new(service: Arc<FizzBuzzService>) -> Self {
        Self { service }
    }
}

/// API Server for fizzbuzz and its metrics.
pub struct ApiServer {
    listen_addr: String,
    state: ApiState,
}

impl ApiServer {
    pub fn new(listen_addr: String, service: Arc<FizzBuzzService>) -> Self {
        Self {
            listen_addr,
            state: ApiState::new(service),
        }
    }

    /// Get shared state for use by other components.
    pub fn state(&self) -> ApiState {
        self.state.clone()
    }

    /// Build the router with all routes and layers.
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Bind the configured address and serve until `shutdown` fires.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn run(&self, shutdown: ShutdownController) -> anyhow::Result<()> {
        let listener = TcpListener::bind(&self.listen_addr).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` fires.
    ///
    /// In-flight requests are allowed to complete before this returns.
    pub async fn serve(
        &self,
        listener: TcpListener,
        shutdown: ShutdownController,
    ) -> anyhow::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!("fizzbuzz API listening on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await?;

        tracing::info!("fizzbuzz API on {} stopped", addr);
        Ok(())
    }
}

/// Build the HTTP router around `state`.
///
/// HEAD is routed explicitly; axum would otherwise answer it with the GET handler.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route(
            "/fizzbuzz",
            get(fizzbuzz_handler)
                .head(method_not_allowed_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/metrics",
            get(metrics_handler)
                .head(method_not_allowed_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/health",
            get(health_handler)
                .head(method_not_allowed_handler)
                .fallback(method_not_allowed_handler),
        )
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Extract the five fizzbuzz parameters, reporting the first bad one.
///
/// Order: int1, int2, limit, str1, str2. An empty value counts as missing.
pub fn parse_fizzbuzz_query(params: &HashMap<String, String>) -> Result<FizzBuzzRequest, ApiError> {
    let int1 = int_param(params, "int1")?;
    let int2 = int_param(params, "int2")?;
    let limit = int_param(params, "limit")?;
    let str1 = str_param(params, "str1")?;
    let str2 = str_param(params, "str2")?;

    Ok(FizzBuzzRequest {
        int1,
        int2,
        limit,
        str1,
        str2,
    })
}

fn int_param(params: &HashMap<String, String>, name: &'static str) -> Result<i64, ApiError> {
    match params.get(name).map(String::as_str) {
        None | Some("") => Err(ApiError::MissingParameter(name)),
        Some(raw) => raw.parse().map_err(|_| ApiError::InvalidParameter(name)),
    }
}

fn str_param(params: &HashMap<String, String>, name: &'static str) -> Result<String, ApiError> {
    match params.get(name) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(ApiError::MissingParameter(name)),
    }
}

// Handler functions

async fn fizzbuzz_handler(
    State(state): State<ApiState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    let result = parse_fizzbuzz_query(&params)
        .and_then(|request| state.service.fizzbuzz(request).map_err(ApiError::from));

    match result {
        Ok(data) => Ok(Json(ApiResponse::data(data))),
        Err(e) => {
            tracing::debug!("rejected fizzbuzz request: {}", e);
            Err(e)
        }
    }
}

async fn metrics_handler(State(state): State<ApiState>) -> Json<ApiResponse<MetricsResponse>> {
    match state.service.top_hit() {
        Ok(top_hit) => Json(ApiResponse::data(MetricsResponse { top_hit })),
        Err(MetricsError::NotFound) => Json(ApiResponse::message(NO_METRICS_MESSAGE)),
    }
}

async fn health_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        tracked_requests: state.service.tracked_requests(),
    };
    Json(response)
}

async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}
