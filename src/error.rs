use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum OrdexError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for OrdexError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match &self {
            OrdexError::Database(e) => {
                tracing::error!(error = %e, "database error");
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: self.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_maps_to_internal_server_error() {
        let err = OrdexError::Database(SqlxError::PoolClosed);
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
