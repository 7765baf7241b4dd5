/// Bearer token configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    /// Require a valid bearer token on every API request.
    pub enabled: bool,
    /// HS256 shared secret.
    pub jwt_secret: Option<String>,
    /// RS256 public key, PEM-encoded. Takes precedence over the secret.
    pub jwt_public_key: Option<String>,
    /// Expected `iss` claim.
    pub issuer: Option<String>,
    /// Accepted `aud` values. Empty disables the audience check.
    pub audience: Vec<String>,
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `RUN_WITH_AUTH`: Require bearer tokens (default: false)
    /// - `AUTH_JWT_SECRET`: HS256 shared secret
    /// - `AUTH_JWT_PUBLIC_KEY`: RS256 public key PEM
    /// - `AUTH_ISSUER`: Expected issuer
    /// - `AUTH_AUDIENCE`: Comma-separated list of accepted audiences
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            enabled: std::env::var("RUN_WITH_AUTH")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            jwt_secret: non_empty("AUTH_JWT_SECRET"),
            jwt_public_key: non_empty("AUTH_JWT_PUBLIC_KEY"),
            issuer: non_empty("AUTH_ISSUER"),
            audience: non_empty("AUTH_AUDIENCE")
                .map(|v| split_list(&v))
                .unwrap_or_default(),
        }
    }

    /// Returns a config that accepts HS256 tokens signed with `secret`.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            enabled: true,
            jwt_secret: Some(secret.into()),
            ..Self::default()
        }
    }
}

/// Parses a boolean environment flag. Accepts `true`/`1`/`yes`/`on`.
pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
