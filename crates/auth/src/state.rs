//! Shared state for the auth extractor.

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt::JwtValidator;

/// Auth state carried in the application state.
///
/// `None` means authentication is disabled.
#[derive(Clone, Default)]
pub struct AuthState {
    validator: Option<Arc<JwtValidator>>,
}

impl AuthState {
    /// State that lets every request through as the shared owner.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Builds the state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if auth is enabled and the key material is unusable.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        if !config.enabled {
            tracing::info!("Authentication disabled, all requests act as the shared owner");
            return Ok(Self::disabled());
        }

        let validator = JwtValidator::from_config(config)?;
        Ok(Self {
            validator: Some(Arc::new(validator)),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.validator.is_some()
    }

    pub(crate) fn validator(&self) -> Option<&JwtValidator> {
        self.validator.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        let state = AuthState::from_config(&AuthConfig::default()).unwrap();
        assert!(!state.is_enabled());
    }

    #[test]
    fn test_enabled_with_secret() {
        let state = AuthState::from_config(&AuthConfig::with_secret("s")).unwrap();
        assert!(state.is_enabled());
    }
}
