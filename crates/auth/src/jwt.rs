//! JWT validation for bearer tokens.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Claims read from a validated token.
///
/// `exp` is checked by the validator. Only the subject is kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Claims {
    pub sub: String,
}

/// Validates bearer tokens against a single signing key.
#[derive(Clone)]
pub struct JwtValidator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Builds a validator from the configured key material.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Config`] if no key is configured or the PEM is invalid.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        let (key, algorithm) = match (&config.jwt_public_key, &config.jwt_secret) {
            (Some(pem), _) => {
                let key = DecodingKey::from_rsa_pem(pem.as_bytes())
                    .map_err(|e| AuthError::Config(format!("invalid RS256 public key: {e}")))?;
                (key, Algorithm::RS256)
            }
            (None, Some(secret)) => (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256),
            (None, None) => {
                return Err(AuthError::Config(
                    "authentication is enabled but neither AUTH_JWT_PUBLIC_KEY nor AUTH_JWT_SECRET is set"
                        .to_string(),
                ))
            }
        };

        let mut validation = Validation::new(algorithm);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }
        if config.audience.is_empty() {
            validation.validate_aud = false;
        } else {
            validation.set_audience(config.audience.as_slice());
        }

        tracing::info!(?algorithm, issuer = ?config.issuer, "JWT validation configured");

        Ok(Self { key, validation })
    }

    /// Decodes `token` and returns its claims.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if data.claims.sub.trim().is_empty() {
            return Err(AuthError::InvalidToken("empty subject".to_string()));
        }
        Ok(data.claims)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    pub(crate) const SECRET: &str = "test-secret";

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    /// Signs an HS256 token with the given claims.
    pub(crate) fn sign(claims: serde_json::Value, secret: &str) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    pub(crate) fn token_for(sub: &str) -> String {
        sign(serde_json::json!({ "sub": sub, "exp": now() + 3600 }), SECRET)
    }

    fn validator(config: AuthConfig) -> JwtValidator {
        JwtValidator::from_config(&config).unwrap()
    }

    #[test]
    fn test_valid_token_yields_subject() {
        let validator = validator(AuthConfig::with_secret(SECRET));
        let claims = validator.validate(&token_for("u1")).unwrap();
        assert_eq!(claims.sub, "u1");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let validator = validator(AuthConfig::with_secret("other"));
        assert!(matches!(
            validator.validate(&token_for("u1")),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let validator = validator(AuthConfig::with_secret(SECRET));
        let token = sign(serde_json::json!({ "sub": "u1", "exp": now() - 3600 }), SECRET);
        assert!(validator.validate(&token).is_err());
    }

    #[test]
    fn test_empty_subject_is_rejected() {
        let validator = validator(AuthConfig::with_secret(SECRET));
        let token = sign(serde_json::json!({ "sub": "", "exp": now() + 3600 }), SECRET);
        assert_eq!(
            validator.validate(&token),
            Err(AuthError::InvalidToken("empty subject".to_string()))
        );
    }

    #[test]
    fn test_issuer_and_audience_are_checked() {
        let config = AuthConfig {
            issuer: Some("https://issuer.test".to_string()),
            audience: vec!["todoboard".to_string()],
            ..AuthConfig::with_secret(SECRET)
        };
        let validator = validator(config);

        let good = sign(
            serde_json::json!({
                "sub": "u1",
                "exp": now() + 3600,
                "iss": "https://issuer.test",
                "aud": "todoboard",
            }),
            SECRET,
        );
        let wrong_aud = sign(
            serde_json::json!({
                "sub": "u1",
                "exp": now() + 3600,
                "iss": "https://issuer.test",
                "aud": "someone-else",
            }),
            SECRET,
        );

        assert!(validator.validate(&good).is_ok());
        assert!(validator.validate(&wrong_aud).is_err());
    }

    #[test]
    fn test_audience_claim_ignored_when_unconfigured() {
        let validator = validator(AuthConfig::with_secret(SECRET));
        let token = sign(
            serde_json::json!({ "sub": "u1", "exp": now() + 3600, "aud": "anything" }),
            SECRET,
        );
        assert!(validator.validate(&token).is_ok());
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let config = AuthConfig {
            enabled: true,
            ..AuthConfig::default()
        };
        assert!(matches!(
            JwtValidator::from_config(&config),
            Err(AuthError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_pem_is_config_error() {
        let config = AuthConfig {
            jwt_public_key: Some("not a pem".to_string()),
            ..AuthConfig::with_secret(SECRET)
        };
        assert!(matches!(
            JwtValidator::from_config(&config),
            Err(AuthError::Config(_))
        ));
    }
}
