//! # crmctl-records
//!
//! Generic records engine for the CRM REST API. Everything here operates on
//! *any* object type (standard or custom) without per-type code:
//!
//! - **Object resolution** - map a loosely-specified object name (singular or
//!   plural, any case) to the canonical plural resource name, best-effort
//! - **Query assembly** - turn command options into the canonical query
//!   string (`limit`, `starting_after`, `order_by`, `filter`, ...)
//! - **Mutation bodies** - merge raw JSON and dot-path `--set` expressions
//!   into a single JSON object payload
//! - **List extraction** - pull the item array and page cursor out of a
//!   loosely-typed response body
//! - **Pagination** - drive cursor-based "fetch everything" loops
//! - **Batch execution** - chunk array payloads into size-bounded requests
//!   with a configurable failure policy
//!
//! ## Example
//!
//! ```rust,ignore
//! use crmctl_client::{Credentials, CrmClient};
//! use crmctl_records::{ListParams, RecordsClient};
//!
//! let client = RecordsClient::new(Credentials::from_env()?)?;
//!
//! let object = client.resolve_object("Person", false).await.into_name();
//! let records = client.list_all(&object, &ListParams::default()).await?;
//! ```

mod batch;
mod body;
mod client;
mod error;
mod extract;
mod input;
mod params;
mod resolve;

pub use batch::{run_chunks, BatchOptions, BatchOutcome, FailurePolicy, MAX_CHUNK_SIZE};
pub use body::{build_body, parse_literal};
pub use client::{ListPage, RecordsClient};
pub use error::{Error, ErrorKind, Result};
pub use extract::{extract_list, extract_record, PageInfo, RecordList};
pub use input::read_source;
pub use params::{encode_query, ListParams};
pub use resolve::{match_object, ObjectDef, Resolution};
