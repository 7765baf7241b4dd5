use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use todoboard_core::board::BoardError;
use todoboard_core::storage::{
    board_error_to_status_code, repository_error_to_status_code, RepositoryError,
};

/// Handler error that wraps `anyhow::Error`.
///
/// Domain and storage errors are recognized by downcasting and mapped to
/// their status codes. Everything else is a 500. The body is always
/// `{"error": "<message>"}`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(board_error) = self.0.downcast_ref::<BoardError>() {
            board_error_to_status_code(board_error)
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else {
            500
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }

        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todoboard_core::board::ValidationError;

    #[test]
    fn test_domain_errors_are_bad_request() {
        for error in [
            BoardError::Validation(ValidationError::EmptyName),
            BoardError::ClipboardNotFound(1),
            BoardError::Forbidden(1),
            BoardError::ClipboardNotFoundOrForbidden(1),
            BoardError::ItemNotFoundOrForbidden(1),
        ] {
            assert_eq!(AppError::from(error).status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_storage_errors_use_repository_mapping() {
        let error = BoardError::Storage(RepositoryError::QueryFailed("disk I/O".to_string()));
        assert_eq!(
            AppError::from(error).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let error = RepositoryError::ConnectionFailed("gone".to_string());
        assert_eq!(
            AppError::from(error).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_unknown_errors_are_internal() {
        let error = AppError(anyhow::anyhow!("boom"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
