//! Query parameter assembly for list/export requests.

use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};
use crate::input;

/// Options for a list request, assembled into the canonical query string.
///
/// All fields are optional in the "zero value means unset" sense, so a
/// `Default` instance produces an empty query.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Page size; 0 or negative means unset.
    pub limit: i64,
    /// Continuation cursor from a previous page.
    pub cursor: String,
    /// Inline filter JSON. Preferred over `filter_file` when non-blank.
    pub filter: String,
    /// Path to a file holding filter JSON; `-` reads stdin.
    pub filter_file: Option<String>,
    /// Sort field.
    pub order_by: String,
    /// Sort direction.
    pub order_direction: String,
    /// Field-selection string, passed through verbatim.
    pub fields: String,
    /// Relation-include list; any non-empty entry requests `depth=1`.
    pub include: Vec<String>,
    /// Raw `key=value` pairs appended as-is.
    pub raw: Vec<String>,
}

impl ListParams {
    /// Assemble the ordered query parameter multi-map.
    pub fn to_query(&self) -> Result<Vec<(String, String)>> {
        let mut query = Vec::new();

        if self.limit > 0 {
            query.push(("limit".to_string(), self.limit.to_string()));
        }
        if !self.cursor.is_empty() {
            query.push(("starting_after".to_string(), self.cursor.clone()));
        }
        if !self.order_by.is_empty() {
            query.push(("order_by".to_string(), self.order_by.clone()));
        }
        if !self.order_direction.is_empty() {
            query.push((
                "order_by_direction".to_string(),
                self.order_direction.clone(),
            ));
        }
        if !self.fields.is_empty() {
            query.push(("fields".to_string(), self.fields.clone()));
        }
        if self.include.iter().any(|inc| !inc.trim().is_empty()) {
            query.push(("depth".to_string(), "1".to_string()));
        }
        if let Some(filter) = self.filter_value()? {
            query.push(("filter".to_string(), filter));
        }
        for pair in &self.raw {
            match pair.split_once('=') {
                Some((key, value)) => query.push((key.to_string(), value.to_string())),
                None => return Err(Error::new(ErrorKind::InvalidParam(pair.clone()))),
            }
        }

        Ok(query)
    }

    /// Read and normalize the filter, if any.
    ///
    /// The filter JSON is re-serialized with compact encoding so the query
    /// value round-trips regardless of how the input was formatted. A
    /// present-but-blank or `null` source yields no filter at all.
    fn filter_value(&self) -> Result<Option<String>> {
        let Some(text) = input::read_source(&self.filter, self.filter_file.as_deref())? else {
            return Ok(None);
        };
        if text.trim().is_empty() {
            return Ok(None);
        }

        let value: Value = serde_json::from_str(&text)
            .map_err(|e| Error::with_source(ErrorKind::Filter(e.to_string()), e))?;
        if value.is_null() {
            return Ok(None);
        }

        serde_json::to_string(&value).map(Some).map_err(Into::into)
    }
}

/// Encode an assembled multi-map as a query string.
pub fn encode_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&")
}
