//! Mapping of registry errors and extractor rejections onto HTTP responses

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use heroes_core::CoreError;
use tracing::{debug, error};

use crate::models::ErrorResponse;

pub type ApiResult<T> = Result<T, ApiError>;

/// An error ready to be sent to the client
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: error.into(),
                code: Some(code.into()),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn validation(message: String) -> Self {
        debug!("Rejected request: {}", message);
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message, "VALIDATION_ERROR")
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::NotFound { entity, .. } => Self::new(
                StatusCode::NOT_FOUND,
                err.to_string(),
                format!("{}_NOT_FOUND", entity.as_str().to_uppercase()),
            ),
            CoreError::InvalidReference { .. } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                err.to_string(),
                "INVALID_REFERENCE",
            ),
            CoreError::Validation(message) => Self::validation(message.clone()),
            CoreError::Database(db_err) => {
                error!("Database error: {}", db_err);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    err.to_string(),
                    "DATABASE_ERROR",
                )
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// JSON body extractor whose rejections use [`ErrorResponse`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejections use [`ErrorResponse`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Path extractor whose rejections use [`ErrorResponse`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
