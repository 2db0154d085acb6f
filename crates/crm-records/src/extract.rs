//! Extracting list data and page cursors from loosely-typed responses.

use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};

/// Page cursor state extracted from a response's `pageInfo` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: String,
}

impl PageInfo {
    /// Whether another page can actually be fetched.
    ///
    /// The server claiming more pages with an empty cursor would loop
    /// forever, so both conditions must hold.
    pub fn has_more(&self) -> bool {
        self.has_next_page && !self.end_cursor.is_empty()
    }
}

/// Items plus cursor state pulled from one list response.
#[derive(Debug, Clone)]
pub struct RecordList {
    pub records: Vec<Value>,
    pub page: Option<PageInfo>,
}

/// Extract the item array and page state from a list response body.
///
/// The array is looked up under `data[plural]` first; some endpoints nest
/// results under a different key, so failing that the first array-valued
/// entry of `data` (in map order) is used.
pub fn extract_list(body: &Value, plural: &str) -> Result<RecordList> {
    let data = body
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::new(ErrorKind::MissingData))?;

    let records = match data.get(plural).and_then(Value::as_array) {
        Some(records) => records.clone(),
        None => data
            .values()
            .find_map(|value| value.as_array().cloned())
            .ok_or_else(|| Error::new(ErrorKind::NoListData(plural.to_string())))?,
    };

    Ok(RecordList {
        records,
        page: page_info(body),
    })
}

/// Extract a single record object from a `{"data":{<name>:{...}}}` response.
///
/// The record key may be the singular or the plural name, so an exact match
/// is preferred and any object-valued entry accepted otherwise.
pub fn extract_record(body: &Value, name: &str) -> Result<Value> {
    let data = body
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::new(ErrorKind::MissingData))?;

    if let Some(value) = data.get(name) {
        if value.is_object() {
            return Ok(value.clone());
        }
    }

    data.values()
        .find(|value| value.is_object())
        .cloned()
        .ok_or_else(|| Error::new(ErrorKind::NoRecordData(name.to_string())))
}

fn page_info(body: &Value) -> Option<PageInfo> {
    let info = body.get("pageInfo")?.as_object()?;
    Some(PageInfo {
        has_next_page: info
            .get("hasNextPage")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        end_cursor: info
            .get("endCursor")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
    })
}
