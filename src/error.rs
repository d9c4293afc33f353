/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / `{errors:[{message}]}` JSON body)
 * - 認可導出の失敗 (DeriveError) を 401/403 に決定的に変換
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::credentials::DeriveError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorBody>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorResponse {
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorBody {
                message: message.into(),
            }],
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse::single(self.to_string()))).into_response()
    }
}

impl From<DeriveError> for AppError {
    fn from(e: DeriveError) -> Self {
        match e {
            DeriveError::Unauthorized { .. } => AppError::Unauthorized(e.to_string()),
            DeriveError::Forbidden { .. } => AppError::Forbidden(e.to_string()),
        }
    }
}
