//! Error types for crmctl-records.

/// Result type alias for crmctl-records operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for crmctl-records operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// A raw `key=value` query parameter without a `=`.
    #[error("invalid param \"{0}\" (expected key=value)")]
    InvalidParam(String),

    /// A `--set` expression that cannot be applied.
    #[error("invalid set expression \"{0}\"")]
    InvalidSet(String),

    /// A `--set` path runs through a value that is not an object.
    #[error("cannot set \"{path}\": \"{segment}\" is not an object")]
    SetConflict { path: String, segment: String },

    /// A raw mutation payload that is valid JSON but not an object.
    #[error("payload must be a JSON object")]
    PayloadNotAnObject,

    /// No payload source was given at all.
    #[error("missing JSON payload; use --data, --file, or --set")]
    MissingPayload,

    /// Malformed filter JSON.
    #[error("invalid filter: {0}")]
    Filter(String),

    /// Failed to read an input file or stdin.
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// Response body had no top-level `data` object.
    #[error("response has no \"data\" object")]
    MissingData,

    /// Response `data` held no list under the expected key or any other.
    #[error("response did not contain list data for {0}")]
    NoListData(String),

    /// Response `data` held no record object.
    #[error("response did not contain record data for {0}")]
    NoRecordData(String),

    /// JSON parse/serialize error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Transport or API error from the underlying client.
    #[error("{0}")]
    Client(String),
}

impl From<crmctl_client::Error> for Error {
    fn from(err: crmctl_client::Error) -> Self {
        Error {
            kind: ErrorKind::Client(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        let err = Error::new(ErrorKind::InvalidParam("nokey".into()));
        assert_eq!(err.to_string(), "invalid param \"nokey\" (expected key=value)");

        let err = Error::new(ErrorKind::MissingPayload);
        assert_eq!(
            err.to_string(),
            "missing JSON payload; use --data, --file, or --set"
        );

        let err = Error::new(ErrorKind::PayloadNotAnObject);
        assert_eq!(err.to_string(), "payload must be a JSON object");

        let err = Error::new(ErrorKind::NoListData("people".into()));
        assert_eq!(
            err.to_string(),
            "response did not contain list data for people"
        );
    }

    #[test]
    fn test_client_error_preserves_source() {
        let inner = crmctl_client::Error::new(crmctl_client::ErrorKind::Timeout);
        let err: Error = inner.into();
        assert!(matches!(err.kind, ErrorKind::Client(_)));
        assert!(err.source.is_some());
    }
}
