//! High-level CRM client with typed HTTP methods.
//!
//! `CrmClient` combines credentials with an HTTP client and provides
//! typed JSON methods plus raw-byte access for callers that apply their
//! own parsing to responses.

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::request::RequestBuilder;
use crate::response::Response;

/// High-level CRM API client.
///
/// Designed to be used by higher-level crates (crmctl-records, crmctl).
/// The access token is redacted in Debug output.
///
/// # Example
///
/// ```rust,ignore
/// use crmctl_client::{Credentials, CrmClient};
///
/// let creds = Credentials::from_env()?;
/// let client = CrmClient::new(creds)?;
///
/// let body: serde_json::Value = client.rest_get("people").await?;
/// ```
#[derive(Clone)]
pub struct CrmClient {
    http: HttpClient,
    credentials: Credentials,
}

impl std::fmt::Debug for CrmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrmClient")
            .field("base_url", &self.credentials.base_url())
            .field("api_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl CrmClient {
    /// Create a new CRM client with default HTTP configuration.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new CRM client with custom HTTP configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self { http, credentials })
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        self.credentials.base_url()
    }

    /// Build a full URL for a REST path (e.g. `people` ->
    /// `<base>/rest/people`). A path with a leading scheme is passed
    /// through unchanged.
    pub fn rest_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/rest/{}",
            self.credentials.base_url(),
            path.trim_start_matches('/')
        )
    }

    // =========================================================================
    // Request builders (authenticated)
    // =========================================================================

    /// Create a GET request builder with authentication.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).bearer_auth(self.credentials.api_token())
    }

    /// Create a POST request builder with authentication.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.http
            .post(url)
            .bearer_auth(self.credentials.api_token())
    }

    /// Create a PATCH request builder with authentication.
    pub fn patch(&self, url: &str) -> RequestBuilder {
        self.http
            .patch(url)
            .bearer_auth(self.credentials.api_token())
    }

    /// Create a DELETE request builder with authentication.
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.http
            .delete(url)
            .bearer_auth(self.credentials.api_token())
    }

    /// Execute a request and return the raw response.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        self.http.execute(request).await
    }

    // =========================================================================
    // Typed JSON methods
    // =========================================================================

    /// GET request with JSON response deserialization.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.execute(self.get(url)).await?;
        response.json().await
    }

    /// GET request returning the raw response bytes.
    ///
    /// Callers that apply their own heuristics to loosely-typed responses
    /// want the unparsed body.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_raw(&self, url: &str) -> Result<bytes::Bytes> {
        let response = self.http.execute(self.get(url)).await?;
        response.bytes().await
    }

    /// GET request to a REST path with JSON response.
    pub async fn rest_get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_json(&self.rest_url(path)).await
    }

    /// POST request with JSON body and response.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.post(url).json(body)?;
        let response = self.http.execute(request).await?;
        response.json().await
    }

    /// POST request to a REST path with JSON body and response.
    pub async fn rest_post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.post_json(&self.rest_url(path), body).await
    }

    /// PATCH request with JSON body and response.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.patch(url).json(body)?;
        let response = self.http.execute(request).await?;
        response.json().await
    }

    /// PATCH request to a REST path with JSON body and response.
    pub async fn rest_patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.patch_json(&self.rest_url(path), body).await
    }

    /// DELETE request with JSON response.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn delete_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.execute(self.delete(url)).await?;
        response.json().await
    }

    /// DELETE request to a REST path with JSON response.
    pub async fn rest_delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.delete_json(&self.rest_url(path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CrmClient {
        let creds = Credentials::new("https://crm.example.com", "token123").unwrap();
        CrmClient::new(creds).unwrap()
    }

    #[test]
    fn test_rest_url_building() {
        let client = client();
        assert_eq!(
            client.rest_url("people"),
            "https://crm.example.com/rest/people"
        );
        assert_eq!(
            client.rest_url("/batch/people"),
            "https://crm.example.com/rest/batch/people"
        );
    }

    #[test]
    fn test_rest_url_passthrough_for_absolute() {
        let client = client();
        assert_eq!(
            client.rest_url("https://other.example.com/rest/people"),
            "https://other.example.com/rest/people"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", client());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("token123"));
    }
}
