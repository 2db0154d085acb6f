//! Credentials for the CRM API: base URL + bearer token.

use crate::error::{Error, ErrorKind, Result};

/// Environment variable holding the API base URL.
pub const ENV_BASE_URL: &str = "CRM_BASE_URL";
/// Environment variable holding the API bearer token.
pub const ENV_API_TOKEN: &str = "CRM_API_TOKEN";

/// Credentials for authenticating against the CRM API.
///
/// The token is redacted in Debug output to prevent accidental exposure
/// in logs.
#[derive(Clone)]
pub struct Credentials {
    base_url: String,
    api_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Create credentials from a base URL and bearer token.
    ///
    /// A trailing slash on the base URL is stripped so path joining is
    /// uniform.
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let api_token = api_token.into();

        if base_url.trim().is_empty() {
            return Err(Error::new(ErrorKind::Config("base URL is empty".into())));
        }
        if api_token.trim().is_empty() {
            return Err(Error::new(ErrorKind::Config("API token is empty".into())));
        }

        // Reject unparseable URLs up front rather than on the first request
        url::Url::parse(&base_url)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    /// Read credentials from `CRM_BASE_URL` and `CRM_API_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ENV_BASE_URL)
            .map_err(|_| Error::new(ErrorKind::Config(format!("{} is not set", ENV_BASE_URL))))?;
        let api_token = std::env::var(ENV_API_TOKEN)
            .map_err(|_| Error::new(ErrorKind::Config(format!("{} is not set", ENV_API_TOKEN))))?;
        Self::new(base_url, api_token)
    }

    /// The API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The bearer token.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let creds = Credentials::new("https://crm.example.com/", "tok").unwrap();
        assert_eq!(creds.base_url(), "https://crm.example.com");
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(Credentials::new("", "tok").is_err());
        assert!(Credentials::new("https://crm.example.com", "  ").is_err());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = Credentials::new("not a url", "tok").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let creds = Credentials::new("https://crm.example.com", "super-secret").unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }
}
