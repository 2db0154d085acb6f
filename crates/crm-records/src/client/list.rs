//! List and fetch-all (pagination) operations.

use serde_json::Value;
use tracing::instrument;

use crate::error::Result;
use crate::extract::{extract_list, PageInfo};
use crate::params::{encode_query, ListParams};

/// One page of list results: the raw response body for display plus the
/// extracted items and cursor state.
#[derive(Debug, Clone)]
pub struct ListPage {
    pub body: Value,
    pub records: Vec<Value>,
    pub page: Option<PageInfo>,
}

impl super::RecordsClient {
    /// Fetch one page of records for an object.
    #[instrument(skip(self, params))]
    pub async fn list(&self, object: &str, params: &ListParams) -> Result<ListPage> {
        let query = params.to_query()?;
        let mut url = self.object_url(object);
        let encoded = encode_query(&query);
        if !encoded.is_empty() {
            url = format!("{}?{}", url, encoded);
        }

        let raw = self.inner().get_raw(&url).await?;
        let body: Value = serde_json::from_slice(&raw)?;
        let list = extract_list(&body, object)?;

        Ok(ListPage {
            body,
            records: list.records,
            page: list.page,
        })
    }

    /// Fetch every record for an object, following the page cursor until
    /// the server reports no more pages or stops returning a cursor.
    #[instrument(skip(self, params))]
    pub async fn list_all(&self, object: &str, params: &ListParams) -> Result<Vec<Value>> {
        let mut params = params.clone();
        let mut all_records = Vec::new();

        loop {
            let page = self.list(object, &params).await?;
            all_records.extend(page.records);

            match page.page {
                Some(ref info) if info.has_more() => {
                    params.cursor = info.end_cursor.clone();
                }
                _ => break,
            }
        }

        Ok(all_records)
    }
}
