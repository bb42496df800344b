//! Homolog HTTP Client
//!
//! A small, type-safe HTTP client for the remote homology-modeling service.
//!
//! This crate provides the [`ProjectApi`] trait (submit a modeling project,
//! fetch its models summary) and [`ModelingClient`], the reqwest-backed
//! implementation used in production. The engine crate drives the workflow
//! exclusively through the trait, so tests can substitute scripted
//! implementations.
//!
//! # Example
//!
//! ```no_run
//! use homolog_client::{ModelingClient, ProjectApi};
//! use homolog_core::domain::job::ModelingRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), homolog_client::ClientError> {
//!     let client = ModelingClient::new("https://swissmodel.expasy.org", "my-token");
//!
//!     let request = ModelingRequest::automodel(
//!         vec!["MVLSPADKTNVKAAW".to_string()],
//!         "hemoglobin alpha",
//!     );
//!
//!     let handle = client.submit(&request).await?;
//!     println!("project accepted: {}", handle);
//!     Ok(())
//! }
//! ```

pub mod error;
mod projects;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use projects::ProjectApi;

use reqwest::Client;

/// HTTP client for the modeling service API
///
/// Holds the service base URL, the caller's API token, and a reqwest
/// client. The token is opaque configuration injected at construction
/// time; it is sent as a `Token`-scheme authorization header on every
/// request. Cloning is cheap and clones share the underlying connection
/// pool.
#[derive(Debug, Clone)]
pub struct ModelingClient {
    /// Base URL of the service (e.g., "https://swissmodel.expasy.org")
    base_url: String,
    /// Opaque API token for the authorization header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl ModelingClient {
    /// Create a new modeling service client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the service API
    /// * `token` - The API token to authorize requests with
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a new client with a custom reqwest client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use homolog_client::ModelingClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ModelingClient::with_client(
    ///     "https://swissmodel.expasy.org",
    ///     "my-token",
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    /// Authorization header value for the service's token scheme
    pub(crate) fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ModelingClient::new("https://swissmodel.expasy.org", "tok");
        assert_eq!(client.base_url(), "https://swissmodel.expasy.org");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ModelingClient::new("https://swissmodel.expasy.org/", "tok");
        assert_eq!(client.base_url(), "https://swissmodel.expasy.org");
    }

    #[test]
    fn test_auth_header_uses_token_scheme() {
        let client = ModelingClient::new("https://swissmodel.expasy.org", "tok");
        assert_eq!(client.auth_header(), "Token tok");
    }
}
