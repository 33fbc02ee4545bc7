/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error envelope)
 * - validation error / RepoError / body の parse 失敗を統一的に変換
 *
 * handler はエラーを Result で返すだけ。envelope への変換はここだけで行う。
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;

/// Uniform failure body: `{ "error": true, "errorMsg": "..." }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub error: bool,
    pub error_msg: String,
}

impl ErrorEnvelope {
    pub fn new(error_msg: impl Into<String>) -> Self {
        Self {
            error: true,
            error_msg: error_msg.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("nothing to update")]
    NothingToUpdate,
    #[error("store failure: {0}")]
    Store(#[from] RepoError),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::NothingToUpdate => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::Store(e) => {
                // The cause stays in the log; clients only see the generic message.
                tracing::error!(error = ?e, "store operation failed");
                "internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(ErrorEnvelope::new(message))).into_response()
    }
}
