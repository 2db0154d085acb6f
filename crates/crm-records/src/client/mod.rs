//! Records client: the engine components bound to the CRM wire conventions.
//!
//! Wraps a [`CrmClient`] and provides generic CRUD, list/export, metadata,
//! and batch methods that work for any object type.

use crmctl_client::{ClientConfig, Credentials, CrmClient};

use crate::error::Result;

mod batch;
mod list;
mod metadata;
mod records;

pub use list::ListPage;

/// Generic records client for the CRM REST API.
///
/// # Example
///
/// ```rust,ignore
/// use crmctl_records::RecordsClient;
///
/// let client = RecordsClient::new(Credentials::from_env()?)?;
///
/// let object = client.resolve_object("company", false).await.into_name();
/// let page = client.list(&object, &ListParams::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RecordsClient {
    client: CrmClient,
}

impl RecordsClient {
    /// Create a new records client with default HTTP configuration.
    pub fn new(credentials: Credentials) -> Result<Self> {
        let client = CrmClient::new(credentials)?;
        Ok(Self { client })
    }

    /// Create a new records client with custom HTTP configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let client = CrmClient::with_config(credentials, config)?;
        Ok(Self { client })
    }

    /// Create a records client from an existing CrmClient.
    pub fn from_client(client: CrmClient) -> Self {
        Self { client }
    }

    /// Get the underlying CrmClient.
    pub fn inner(&self) -> &CrmClient {
        &self.client
    }

    /// URL for an object's collection endpoint.
    fn object_url(&self, object: &str) -> String {
        self.client.rest_url(object)
    }

    /// URL for a single record.
    fn record_url(&self, object: &str, id: &str) -> String {
        self.client
            .rest_url(&format!("{}/{}", object, urlencoding::encode(id)))
    }

    /// URL for an object's batch endpoint.
    fn batch_url(&self, object: &str) -> String {
        self.client.rest_url(&format!("batch/{}", object))
    }
}
