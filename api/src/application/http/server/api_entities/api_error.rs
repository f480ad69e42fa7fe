use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rbac_admin_core::domain::{common::entities::app_errors::CoreError, mapping::MappingError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: i64,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::InvalidQuery(message) => ApiError::BadRequest(message),
            CoreError::Mapping(MappingError::UnknownFormat(format)) => {
                ApiError::BadRequest(format!("Unknown format '{}'", format))
            }
            CoreError::Mapping(e) => ApiError::InternalServerError(e.to_string()),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ApiErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: i64::from(status.as_u16()),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_statuses() {
        assert_eq!(
            ApiError::from(CoreError::NotFound).status_and_code().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CoreError::InvalidQuery("bad".to_string())),
            ApiError::BadRequest("bad".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::Mapping(MappingError::UnknownFormat("x".to_string()))),
            ApiError::BadRequest("Unknown format 'x'".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::Mapping(MappingError::RecursionLimit { max_depth: 10 }))
                .status_and_code()
                .0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_response_status() {
        let response = ApiError::NotFound("User not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
