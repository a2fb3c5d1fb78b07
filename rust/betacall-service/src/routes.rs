use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{http::StatusCode, response::IntoResponse, routing::{get, post}, Json, Router};
use betacall_core::{
    build_audio_manifest, compute_route, process_positions, validate_positions, AudioManifest, Position, ProcessRouteRequest,
    ProcessRouteResult, ProcessedPosition, RouteConfig,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info, info_span, Instrument};

use crate::errors::AppError;
use crate::tts::TextToSpeech;

#[derive(Clone)]
pub struct AppState {
    pub route: Arc<RouteConfig>,
    pub tts: Arc<dyn TextToSpeech>,
}

#[derive(Debug, Serialize)]
pub struct Healthz {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedRoute {
    pub route_id: String,
    pub processed_positions: Vec<ProcessedPosition>,
    pub generated_texts: Vec<String>,
    pub audio_files: AudioManifest,
}

/// Stored route: audio identifiers in playback order plus the positions they were made from.
#[derive(Debug, Deserialize)]
pub struct ManifestRequest {
    pub audios: Vec<String>,
    pub positions: Vec<Position>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/version", get(version))
        .route("/instructions", post(instructions))
        .route("/manifest", post(manifest))
        .route("/route/:id", post(process_route))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(Healthz { status: "ok" }))
}

async fn version() -> impl IntoResponse {
    let svc_version = env!("CARGO_PKG_VERSION");
    let core_version = betacall_core::version();
    (StatusCode::OK, Json(json!({"service_version": svc_version, "core_version": core_version})))
}

async fn instructions(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRouteRequest>, JsonRejection>,
) -> Result<Json<ProcessRouteResult>, AppError> {
    let Json(req) = payload?;
    let result = compute_route(&req, &state.route)?;
    Ok(Json(result))
}

async fn manifest(
    State(state): State<AppState>,
    payload: Result<Json<ManifestRequest>, JsonRejection>,
) -> Result<Json<AudioManifest>, AppError> {
    let Json(req) = payload?;
    validate_positions(&req.positions)?;
    let processed = process_positions(&req.positions, &state.route)?;
    let manifest = build_audio_manifest(&req.audios, &processed, &state.route)?;
    Ok(Json(manifest))
}

async fn process_route(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
    payload: Result<Json<ProcessRouteRequest>, JsonRejection>,
) -> Result<Json<ProcessedRoute>, AppError> {
    let Json(req) = payload?;
    let span = info_span!("process_route", route_id = %route_id, positions = req.positions.len());
    async move {
        let computed = compute_route(&req, &state.route).inspect_err(|e| error!(error = %e, "route rejected"))?;
        let audio = state
            .tts
            .synthesize(&computed.generated_texts)
            .await
            .inspect_err(|e| error!(error = %e, "text to speech failed"))?;
        let audio_files = build_audio_manifest(&audio, &computed.processed_positions, &state.route)?;
        info!(audio = audio.len(), "route processed");
        Ok::<_, AppError>(Json(ProcessedRoute {
            route_id,
            processed_positions: computed.processed_positions,
            generated_texts: computed.generated_texts,
            audio_files,
        }))
    }
    .instrument(span)
    .await
}
