use crate::app::dto::*;
use crate::app::engine::RouteEngine;
use crate::domain::edge::EdgeId;
use crate::domain::error::ResolveError;
use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Clone)]
pub struct HttpState {
    pub engine: RouteEngine,
}

#[derive(Debug, Clone, serde::Serialize)]
struct ApiErrorBody {
    error: String,
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(ApiErrorBody { error: msg.into() })).into_response()
}

/// Map an engine error to a status: bad selections are the caller's fault,
/// unknown edges are 404, anything else is ours.
fn engine_error(e: anyhow::Error) -> Response {
    let status = match e.downcast_ref::<ResolveError>() {
        Some(ResolveError::UnknownEdge(_)) => StatusCode::NOT_FOUND,
        Some(ResolveError::InvalidStepCount { .. }) => StatusCode::BAD_REQUEST,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    };
    api_error(status, format!("{e:#}"))
}

async fn run_blocking<T, F>(f: F) -> Response
where
    T: serde::Serialize + Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    match spawn_blocking(f).await {
        Ok(Ok(res)) => Json(res).into_response(),
        Ok(Err(e)) => engine_error(e),
        Err(e) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("task join error: {e}"),
        ),
    }
}

pub fn build_router(engine: RouteEngine) -> Router {
    let state = Arc::new(HttpState { engine });

    Router::new()
        .route("/health", get(health))
        .route("/resolve", post(resolve))
        .route("/edges/{id}", get(edge))
        .route("/measure", post(measure))
        .route("/points", post(mark_point))
        .route("/reload", post(reload))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn serve(engine: RouteEngine, addr: SocketAddr) -> Result<()> {
    let app = build_router(engine);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "http server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health(State(state): State<Arc<HttpState>>) -> Response {
    match state.engine.health() {
        Ok(res) => Json(res).into_response(),
        Err(e) => engine_error(e),
    }
}

async fn reload(State(state): State<Arc<HttpState>>) -> Response {
    let engine = state.engine.clone();
    run_blocking(move || engine.reload()).await
}

async fn resolve(
    State(state): State<Arc<HttpState>>,
    Json(req): Json<ResolveRequest>,
) -> Response {
    let engine = state.engine.clone();
    run_blocking(move || engine.resolve(req)).await
}

async fn edge(State(state): State<Arc<HttpState>>, Path(id): Path<EdgeId>) -> Response {
    match state.engine.edge(id) {
        Ok(res) => Json(res).into_response(),
        Err(e) => engine_error(e),
    }
}

async fn measure(
    State(state): State<Arc<HttpState>>,
    Json(req): Json<MeasureRequest>,
) -> impl IntoResponse {
    Json(state.engine.measure(req))
}

async fn mark_point(
    State(state): State<Arc<HttpState>>,
    Json(at): Json<LatLngDto>,
) -> impl IntoResponse {
    Json(state.engine.mark_point(at))
}
