//! HTTP response handling with CRM API error parsing.

use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around an HTTP response with additional functionality.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    /// Create a new Response from a reqwest::Response.
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        let status = self.status();
        (200..300).contains(&status)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Retry-After header as a Duration.
    pub fn retry_after(&self) -> Option<Duration> {
        let value = self.header("retry-after")?;
        value.parse::<u64>().ok().map(Duration::from_secs)
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Get the response body as bytes.
    pub async fn bytes(self) -> Result<bytes::Bytes> {
        self.inner.bytes().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        self.inner.json().await.map_err(Into::into)
    }

    /// Check for CRM API errors and convert to the appropriate error type.
    ///
    /// Success (2xx) responses pass through untouched.
    pub async fn check_api_error(self) -> Result<Response> {
        let status = self.status();

        if self.is_success() {
            return Ok(self);
        }

        let body = self.text().await.unwrap_or_default();
        Err(parse_error_response(status, &body))
    }
}

/// Parse an error response body and convert to the appropriate error kind.
fn parse_error_response(status: u16, body: &str) -> Error {
    if status == 429 {
        return Error::new(ErrorKind::RateLimited { retry_after: None });
    }

    // Try the API's structured error shape first
    if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
        return Error::new(ErrorKind::Api {
            error: err.error.unwrap_or_else(|| status.to_string()),
            message: truncate_message(&err.message),
        });
    }

    let message = truncate_message(body);
    let kind = match status {
        401 => ErrorKind::Authentication(message),
        403 => ErrorKind::Authorization(message),
        404 => ErrorKind::NotFound(message),
        _ => ErrorKind::Http { status, message },
    };

    Error::new(kind)
}

/// Truncate overlong error bodies so HTML error pages and the like do not
/// flood the terminal.
fn truncate_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut out = message.to_string();
    if out.len() > MAX_LENGTH {
        out.truncate(MAX_LENGTH);
        out.push_str("...[truncated]");
    }
    out
}

/// CRM API error response format.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    message: String,
    error: Option<String>,
}
