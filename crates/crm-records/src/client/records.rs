//! Single-record CRUD operations.

use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::Result;
use crate::extract::extract_record;

impl super::RecordsClient {
    /// Fetch a single record by id.
    #[instrument(skip(self))]
    pub async fn get(&self, object: &str, id: &str, include_relations: bool) -> Result<Value> {
        let mut url = self.record_url(object, id);
        if include_relations {
            url.push_str("?depth=1");
        }

        let raw = self.inner().get_raw(&url).await?;
        let body: Value = serde_json::from_slice(&raw)?;
        extract_record(&body, object)
    }

    /// Create a record.
    #[instrument(skip(self, record))]
    pub async fn create(&self, object: &str, record: &Map<String, Value>) -> Result<Value> {
        let url = self.object_url(object);
        let body: Value = self.inner().post_json(&url, record).await?;
        extract_record(&body, object)
    }

    /// Update a record by id.
    #[instrument(skip(self, record))]
    pub async fn update(
        &self,
        object: &str,
        id: &str,
        record: &Map<String, Value>,
    ) -> Result<Value> {
        let url = self.record_url(object, id);
        let body: Value = self.inner().patch_json(&url, record).await?;
        extract_record(&body, object)
    }

    /// Delete a record by id. Returns the record stub the API echoes back.
    #[instrument(skip(self))]
    pub async fn delete(&self, object: &str, id: &str) -> Result<Value> {
        let url = self.record_url(object, id);
        let body: Value = self.inner().delete_json(&url).await?;
        extract_record(&body, object)
    }
}
