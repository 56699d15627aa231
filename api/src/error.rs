//! Unified error types for the Customer API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Sentinel errors shared by every layer, plus raw store failures
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)
//!
//! `DomainError::status_code` is the single place where a sentinel is turned
//! into an HTTP status. Anything not listed there resolves to 500.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain layer errors - fixed sentinels with stable messages
///
/// Only `NotFound` and `Database` are raised by the customer flow today;
/// the rest keep their place in the status table.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("internal Server Error")]
    InternalServerError,

    #[error("your requested Item is not found")]
    NotFound,

    #[error("your Item already exist")]
    Conflict,

    #[error("given Param is not valid")]
    BadParamInput,

    // 400
    #[error("invalid userID")]
    InvalidUserId,

    #[error("upload limit reached")]
    UploadLimit,

    // 401
    #[error("invalid credentials")]
    InvalidCredentials,

    // 403
    #[error("permission denied")]
    PermissionDenied,

    #[error("invalid recaptcha")]
    InvalidRecaptcha,

    // 404
    #[error("username not found in the system")]
    UsernameNotFound,

    // 409
    #[error("username already exists")]
    UsernameExist,

    #[error("email already exists")]
    EmailExist,

    #[error("phone number already exists")]
    PhoneExist,

    /// Raw store failure, message passed through untouched
    #[error("{0}")]
    Database(String),
}

impl DomainError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DomainError::BadParamInput | DomainError::InvalidUserId | DomainError::UploadLimit => {
                StatusCode::BAD_REQUEST
            }
            DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            DomainError::PermissionDenied | DomainError::InvalidRecaptcha => StatusCode::FORBIDDEN,
            DomainError::NotFound | DomainError::UsernameNotFound => StatusCode::NOT_FOUND,
            DomainError::Conflict
            | DomainError::UsernameExist
            | DomainError::EmailExist
            | DomainError::PhoneExist => StatusCode::CONFLICT,
            DomainError::InternalServerError | DomainError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Request body could not be parsed
    #[error("{0}")]
    BadRequest(String),

    /// Per-field validation failures, keyed by field name
    #[error("validation failed: {0:?}")]
    Validation(BTreeMap<String, String>),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseError {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Domain(e) => {
                let status = e.status_code();
                if status.is_server_error() {
                    tracing::error!(error = %e, status = status.as_u16(), "Request failed");
                } else {
                    tracing::warn!(error = %e, status = status.as_u16(), "Request rejected");
                }
                let body = Json(ResponseError {
                    message: e.to_string(),
                });
                (status, body).into_response()
            }
            AppError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Unparsable request body");
                (StatusCode::BAD_REQUEST, Json(ResponseError { message: msg })).into_response()
            }
            AppError::Validation(fields) => {
                tracing::debug!(?fields, "Request body failed validation");
                (StatusCode::BAD_REQUEST, Json(fields)).into_response()
            }
        }
    }
}
