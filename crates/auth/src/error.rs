use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Auth errors for the todoboard_auth crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on the request
    #[error("missing bearer token")]
    MissingToken,

    /// Authorization header present but not a bearer token
    #[error("invalid authorization header")]
    InvalidHeader,

    /// Token failed signature or claim validation
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::MissingToken | AuthError::InvalidHeader | AuthError::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AuthError::Config(_) => {
                tracing::error!("Config error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_errors_are_unauthorized() {
        for error in [
            AuthError::MissingToken,
            AuthError::InvalidHeader,
            AuthError::InvalidToken("expired".to_string()),
        ] {
            assert_eq!(error.into_response().status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_config_error_is_internal() {
        let response = AuthError::Config("no key".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
