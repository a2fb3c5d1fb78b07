use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use betacall_core::RouteError;
use serde::Serialize;
use thiserror::Error;

use crate::tts::TtsError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    Unprocessable(String),
    #[error("upstream: {0}")]
    Upstream(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::MalformedInput(_) => AppError::BadRequest(e.to_string()),
            RouteError::UnreachableMove { .. } | RouteError::HeightLevelOutOfRange { .. } => {
                AppError::Unprocessable(e.to_string())
            }
            RouteError::TextToSpeechFailure(_) => AppError::Upstream(e.to_string()),
        }
    }
}

impl From<TtsError> for AppError {
    fn from(e: TtsError) -> Self {
        AppError::Upstream(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorPayload<'a>,
}

#[derive(Serialize)]
struct ErrorPayload<'a> {
    code: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Unprocessable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable_route"),
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, "text_to_speech"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };
        let body = ErrorBody { error: ErrorPayload { code, message: self.to_string() } };
        (status, Json(body)).into_response()
    }
}
