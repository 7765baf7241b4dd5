//! HTTP client for the todoboard API.

pub mod clipboards;
pub mod health;
pub mod items;

use crate::error::{error_message, ClientError, Result};

/// HTTP client for the todoboard API.
#[derive(Debug, Clone)]
pub struct TodoboardClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl TodoboardClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Create from environment (TODOBOARD_URL and TODOBOARD_TOKEN).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("TODOBOARD_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let client = Self::new(base_url);
        match std::env::var("TODOBOARD_TOKEN") {
            Ok(token) => client.with_token(token),
            Err(_) => client,
        }
    }

    /// Send `Authorization: Bearer <token>` on every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request, attaching the bearer token if one is set.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = error_message(&body);

        if status.as_u16() == 401 {
            Err(ClientError::Unauthorized(message))
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = TodoboardClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/api/clipboards"), "http://localhost:3000/api/clipboards");
    }
}
