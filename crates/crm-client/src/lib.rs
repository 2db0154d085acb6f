//! # crmctl-client
//!
//! Core HTTP client infrastructure for the CRM REST API.
//!
//! This crate provides the foundational HTTP client with:
//! - Automatic retry with exponential backoff and jitter
//! - Compression support (gzip, deflate)
//! - Rate limit detection and handling
//! - Connection pooling
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │                  (crmctl-records, crmctl)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       CrmClient                             │
//! │  - Holds credentials + HTTP client                          │
//! │  - Provides typed JSON methods (get_json, post_json, etc.)  │
//! │  - Raw byte access for callers with their own parsing       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       HttpClient                            │
//! │  - Raw HTTP with retry, compression, rate limiting          │
//! │  - Request building, response handling                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use crmctl_client::{Credentials, CrmClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), crmctl_client::Error> {
//!     let creds = Credentials::from_env()?;
//!     let client = CrmClient::new(creds)?;
//!
//!     let people: serde_json::Value = client.rest_get("people").await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod credentials;
mod crm_client;
mod error;
mod request;
mod response;
mod retry;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use credentials::Credentials;
pub use crm_client::CrmClient;
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::Response;
pub use retry::{BackoffStrategy, RetryConfig, RetryPolicy};

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("crmctl/", env!("CARGO_PKG_VERSION"));
