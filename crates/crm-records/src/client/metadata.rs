//! Object metadata lookup and best-effort name resolution.

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::resolve::{match_object, ObjectDef, Resolution};

#[derive(Debug, Deserialize)]
struct ObjectsEnvelope {
    data: ObjectsData,
}

#[derive(Debug, Deserialize)]
struct ObjectsData {
    #[serde(default)]
    objects: Vec<ObjectDef>,
}

impl super::RecordsClient {
    /// Fetch the known object definitions from the metadata endpoint.
    #[instrument(skip(self))]
    pub async fn object_defs(&self) -> Result<Vec<ObjectDef>> {
        let envelope: ObjectsEnvelope = self.inner().rest_get("metadata/objects").await?;
        Ok(envelope.data.objects)
    }

    /// Resolve a user-supplied object name to the canonical plural.
    ///
    /// Best-effort: a skip flag or blank name short-circuits with no
    /// network call, and any lookup failure falls back to the name as
    /// given. This never fails the surrounding command.
    #[instrument(skip(self))]
    pub async fn resolve_object(&self, name: &str, skip: bool) -> Resolution {
        let trimmed = name.trim();
        if skip || trimmed.is_empty() {
            return Resolution::Fallback(trimmed.to_string());
        }

        match self.object_defs().await {
            Ok(defs) => match_object(trimmed, &defs),
            Err(err) => {
                debug!(error = %err, name = trimmed, "object lookup failed; using name as given");
                Resolution::Fallback(trimmed.to_string())
            }
        }
    }
}
