//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use todoboard_core::board::Owner;

use crate::{AuthError, AuthState};

/// Extractor for the owner a request acts as.
///
/// With auth disabled this is always [`Owner::Shared`]. Otherwise the request
/// must carry a valid `Authorization: Bearer` token, and its `sub` claim
/// becomes [`Owner::User`]. Rejects with 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentOwner(pub Owner);

impl<S> FromRequestParts<S> for CurrentOwner
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        let Some(validator) = auth_state.validator() else {
            return Ok(CurrentOwner(Owner::Shared));
        };

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidHeader)?;

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::InvalidHeader)?;

        let claims = validator.validate(token).inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
        })?;

        Ok(CurrentOwner(Owner::user(claims.sub)))
    }
}
