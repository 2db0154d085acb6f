//! Mutation body building: raw JSON merged with dot-path setters.

use serde_json::{Map, Value};

use crate::error::{Error, ErrorKind, Result};

/// Build a mutation body from an optional raw JSON object and an ordered
/// list of `a.b.c=value` setter expressions.
///
/// Setters are applied left to right; later setters win over earlier ones
/// and over the raw body. With no raw body and no setters there is nothing
/// to send, which is an error.
pub fn build_body(raw: Option<&str>, setters: &[String]) -> Result<Map<String, Value>> {
    if raw.is_none() && setters.is_empty() {
        return Err(Error::new(ErrorKind::MissingPayload));
    }

    let mut body = match raw {
        Some(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err(Error::new(ErrorKind::PayloadNotAnObject)),
            Err(e) => return Err(Error::with_source(ErrorKind::Json(e.to_string()), e)),
        },
        None => Map::new(),
    };

    for expr in setters {
        apply_setter(&mut body, expr)?;
    }

    Ok(body)
}

/// Apply one `path=value` expression to the body, creating intermediate
/// objects as needed.
fn apply_setter(body: &mut Map<String, Value>, expr: &str) -> Result<()> {
    let Some((path, raw_value)) = expr.split_once('=') else {
        return Err(Error::new(ErrorKind::InvalidSet(expr.to_string())));
    };

    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|seg| seg.trim().is_empty()) {
        return Err(Error::new(ErrorKind::InvalidSet(expr.to_string())));
    }

    let value = parse_literal(raw_value);

    let mut current = body;
    for segment in &segments[..segments.len() - 1] {
        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match entry {
            Value::Object(map) => current = map,
            _ => {
                return Err(Error::new(ErrorKind::SetConflict {
                    path: path.to_string(),
                    segment: segment.to_string(),
                }))
            }
        }
    }
    current.insert(segments[segments.len() - 1].to_string(), value);

    Ok(())
}

/// Parse a setter right-hand side: JSON when it parses, plain string
/// otherwise. The empty string stays a string.
pub fn parse_literal(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_payload() {
        let err = build_body(None, &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing JSON payload; use --data, --file, or --set"
        );
    }

    #[test]
    fn test_raw_body_must_be_object() {
        let err = build_body(Some("[1,2,3]"), &[]).unwrap_err();
        assert_eq!(err.to_string(), "payload must be a JSON object");

        let err = build_body(Some("42"), &[]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::PayloadNotAnObject));
    }

    #[test]
    fn test_malformed_raw_body() {
        let err = build_body(Some("{oops"), &[]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
    }

    #[test]
    fn test_explicit_empty_object_is_fine() {
        let body = build_body(Some("{}"), &[]).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_setters_only() {
        let body = build_body(None, &["name=Ada".to_string()]).unwrap();
        assert_eq!(Value::Object(body), json!({"name": "Ada"}));
    }

    #[test]
    fn test_sibling_keys_preserved() {
        let body = build_body(
            None,
            &["a.b=1".to_string(), "a.c=2".to_string()],
        )
        .unwrap();
        assert_eq!(Value::Object(body), json!({"a": {"b": 1, "c": 2}}));
    }

    #[test]
    fn test_later_setter_wins() {
        let body = build_body(
            Some("{\"stage\":\"new\"}"),
            &["stage=open".to_string(), "stage=won".to_string()],
        )
        .unwrap();
        assert_eq!(Value::Object(body), json!({"stage": "won"}));
    }

    #[test]
    fn test_value_literal_parsing() {
        assert_eq!(parse_literal("true"), json!(true));
        assert_eq!(parse_literal("42"), json!(42));
        assert_eq!(parse_literal("null"), Value::Null);
        assert_eq!(parse_literal("[\"a\"]"), json!(["a"]));
        assert_eq!(parse_literal("{\"k\":1}"), json!({"k": 1}));
        assert_eq!(parse_literal(""), json!(""));
        assert_eq!(parse_literal("not{json}"), json!("not{json}"));
    }

    #[test]
    fn test_setter_without_equals() {
        let err = build_body(None, &["noequals".to_string()]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidSet(_)));
        assert!(err.to_string().contains("noequals"));
    }

    #[test]
    fn test_empty_key_and_segment() {
        let err = build_body(None, &["=x".to_string()]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidSet(_)));

        let err = build_body(None, &["a..b=x".to_string()]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidSet(_)));
    }

    #[test]
    fn test_scalar_intermediate_conflicts() {
        let err = build_body(
            Some("{\"a\": 1}"),
            &["a.b=2".to_string()],
        )
        .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::SetConflict { .. }));
        assert!(err.to_string().contains("\"a\" is not an object"));
    }

    #[test]
    fn test_deep_path_creates_intermediates() {
        let body = build_body(None, &["a.b.c=done".to_string()]).unwrap();
        assert_eq!(Value::Object(body), json!({"a": {"b": {"c": "done"}}}));
    }

    #[test]
    fn test_value_containing_equals() {
        let body = build_body(None, &["note=a=b".to_string()]).unwrap();
        assert_eq!(Value::Object(body), json!({"note": "a=b"}));
    }
}
