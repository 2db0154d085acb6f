//! Batch endpoints: chunked create/update and id-filtered delete,
//! destroy, and restore.

use serde_json::Value;
use tracing::instrument;

use crate::batch::{run_chunks, BatchOptions, BatchOutcome};
use crate::error::{Error, Result};

/// Build the id-list filter value the batch endpoints take in the query
/// string: `id[in]:["a","b"]`.
fn id_filter(ids: &[String]) -> String {
    let array = Value::Array(ids.iter().map(|id| Value::String(id.clone())).collect());
    format!("id[in]:{}", array)
}

impl super::RecordsClient {
    /// Create records in chunks via `POST /rest/batch/<object>`.
    #[instrument(skip(self, records, opts))]
    pub async fn batch_create(
        &self,
        object: &str,
        records: &[Value],
        opts: &BatchOptions,
    ) -> BatchOutcome {
        let url = self.batch_url(object);
        run_chunks(records, opts, |chunk| {
            let url = url.clone();
            async move {
                let request = self.inner().post(&url).json(&chunk)?;
                self.inner().execute(request).await?;
                Ok::<(), Error>(())
            }
        })
        .await
    }

    /// Update records in chunks via `PATCH /rest/batch/<object>`.
    #[instrument(skip(self, records, opts))]
    pub async fn batch_update(
        &self,
        object: &str,
        records: &[Value],
        opts: &BatchOptions,
    ) -> BatchOutcome {
        let url = self.batch_url(object);
        run_chunks(records, opts, |chunk| {
            let url = url.clone();
            async move {
                let request = self.inner().patch(&url).json(&chunk)?;
                self.inner().execute(request).await?;
                Ok::<(), Error>(())
            }
        })
        .await
    }

    /// Soft-delete records by id in chunks via
    /// `DELETE /rest/batch/<object>?filter=id[in]:[...]`.
    #[instrument(skip(self, ids, opts))]
    pub async fn batch_delete(
        &self,
        object: &str,
        ids: &[String],
        opts: &BatchOptions,
    ) -> BatchOutcome {
        let url = self.batch_url(object);
        run_chunks(ids, opts, |chunk| {
            let url = format!("{}?filter={}", url, urlencoding::encode(&id_filter(&chunk)));
            async move {
                let request = self.inner().delete(&url);
                self.inner().execute(request).await?;
                Ok::<(), Error>(())
            }
        })
        .await
    }

    /// Hard-delete records by id in chunks via
    /// `POST /rest/batch/<object>/destroy`.
    #[instrument(skip(self, ids, opts))]
    pub async fn batch_destroy(
        &self,
        object: &str,
        ids: &[String],
        opts: &BatchOptions,
    ) -> BatchOutcome {
        self.batch_id_post(object, "destroy", ids, opts).await
    }

    /// Restore soft-deleted records by id in chunks via
    /// `POST /rest/batch/<object>/restore`.
    #[instrument(skip(self, ids, opts))]
    pub async fn batch_restore(
        &self,
        object: &str,
        ids: &[String],
        opts: &BatchOptions,
    ) -> BatchOutcome {
        self.batch_id_post(object, "restore", ids, opts).await
    }

    async fn batch_id_post(
        &self,
        object: &str,
        action: &str,
        ids: &[String],
        opts: &BatchOptions,
    ) -> BatchOutcome {
        let base = format!("{}/{}", self.batch_url(object), action);
        run_chunks(ids, opts, |chunk| {
            let url = format!(
                "{}?filter={}",
                base,
                urlencoding::encode(&id_filter(&chunk))
            );
            async move {
                let request = self.inner().post(&url);
                self.inner().execute(request).await?;
                Ok::<(), Error>(())
            }
        })
        .await
    }
}
