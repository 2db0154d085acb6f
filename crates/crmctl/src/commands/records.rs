//! The `records` command family: generic CRUD, export, and batch.

use anyhow::{anyhow, bail, Context};
use serde_json::{json, Value};

use crmctl_records::{build_body, read_source, BatchOutcome, RecordsClient};

use crate::cli::{BatchCommands, PayloadArgs, RecordsCommands};
use crate::output::OutputOptions;

pub async fn run(
    client: &RecordsClient,
    command: RecordsCommands,
    out: &OutputOptions,
    object_as_is: bool,
) -> anyhow::Result<()> {
    match command {
        RecordsCommands::List { object, query } => {
            let object = client.resolve_object(&object, object_as_is).await.into_name();
            let page = client.list(&object, &query.to_list_params()).await?;
            out.write(&page.body)
        }

        RecordsCommands::Export { object, query } => {
            let object = client.resolve_object(&object, object_as_is).await.into_name();
            let records = client.list_all(&object, &query.to_list_params()).await?;
            let total = records.len();
            let mut data = serde_json::Map::new();
            data.insert(object, Value::Array(records));
            out.write(&json!({ "data": data, "totalCount": total }))
        }

        RecordsCommands::Get {
            object,
            id,
            include,
        } => {
            let object = client.resolve_object(&object, object_as_is).await.into_name();
            let include_relations = include.iter().any(|inc| !inc.trim().is_empty());
            let record = client.get(&object, &id, include_relations).await?;
            out.write(&record)
        }

        RecordsCommands::Create { object, payload } => {
            let object = client.resolve_object(&object, object_as_is).await.into_name();
            let body = payload_body(&payload)?;
            let record = client.create(&object, &body).await?;
            out.write(&record)
        }

        RecordsCommands::Update {
            object,
            id,
            payload,
        } => {
            let object = client.resolve_object(&object, object_as_is).await.into_name();
            let body = payload_body(&payload)?;
            let record = client.update(&object, &id, &body).await?;
            out.write(&record)
        }

        RecordsCommands::Delete { object, id } => {
            let object = client.resolve_object(&object, object_as_is).await.into_name();
            let record = client.delete(&object, &id).await?;
            out.write(&record)
        }

        RecordsCommands::Batch(command) => run_batch(client, command, out, object_as_is).await,
    }
}

async fn run_batch(
    client: &RecordsClient,
    command: BatchCommands,
    out: &OutputOptions,
    object_as_is: bool,
) -> anyhow::Result<()> {
    match command {
        BatchCommands::Create {
            object,
            data,
            file,
            batch,
        } => {
            let object = client.resolve_object(&object, object_as_is).await.into_name();
            let records = load_records(data.as_deref(), file.as_deref())?;
            let outcome = client
                .batch_create(&object, &records, &batch.to_options())
                .await;
            finish_batch(out, outcome)
        }

        BatchCommands::Update {
            object,
            data,
            file,
            batch,
        } => {
            let object = client.resolve_object(&object, object_as_is).await.into_name();
            let records = load_records(data.as_deref(), file.as_deref())?;
            let outcome = client
                .batch_update(&object, &records, &batch.to_options())
                .await;
            finish_batch(out, outcome)
        }

        BatchCommands::Delete {
            object,
            ids,
            file,
            yes,
            batch,
        } => {
            let object = client.resolve_object(&object, object_as_is).await.into_name();
            let ids = load_ids(ids, file.as_deref())?;
            if !yes {
                println!("would affect {} records", ids.len());
                return Ok(());
            }
            let outcome = client
                .batch_delete(&object, &ids, &batch.to_options())
                .await;
            finish_batch(out, outcome)
        }

        BatchCommands::Destroy {
            object,
            ids,
            file,
            yes,
            batch,
        } => {
            let object = client.resolve_object(&object, object_as_is).await.into_name();
            let ids = load_ids(ids, file.as_deref())?;
            if !yes {
                println!("would affect {} records", ids.len());
                return Ok(());
            }
            let outcome = client
                .batch_destroy(&object, &ids, &batch.to_options())
                .await;
            finish_batch(out, outcome)
        }

        BatchCommands::Restore {
            object,
            ids,
            file,
            batch,
        } => {
            let object = client.resolve_object(&object, object_as_is).await.into_name();
            let ids = load_ids(ids, file.as_deref())?;
            let outcome = client
                .batch_restore(&object, &ids, &batch.to_options())
                .await;
            finish_batch(out, outcome)
        }
    }
}

/// Build a mutation body from the payload flags.
fn payload_body(payload: &PayloadArgs) -> anyhow::Result<serde_json::Map<String, Value>> {
    let raw = read_source(
        payload.data.as_deref().unwrap_or(""),
        payload.file.as_deref(),
    )?;
    Ok(build_body(raw.as_deref(), &payload.set)?)
}

/// Load a JSON array of record payloads for batch create/update.
fn load_records(data: Option<&str>, file: Option<&str>) -> anyhow::Result<Vec<Value>> {
    let text = read_source(data.unwrap_or(""), file)?
        .ok_or_else(|| anyhow!("missing JSON payload; use --data or --file"))?;
    let value: Value = serde_json::from_str(&text).context("invalid JSON payload")?;
    match value {
        Value::Array(records) => Ok(records),
        _ => bail!("payload must be a JSON array"),
    }
}

/// Collect record ids from positional args or a JSON array file.
fn load_ids(ids: Vec<String>, file: Option<&str>) -> anyhow::Result<Vec<String>> {
    if !ids.is_empty() {
        return Ok(ids);
    }

    let text = read_source("", file)?
        .ok_or_else(|| anyhow!("missing record ids; pass ids or use --file"))?;
    let value: Value = serde_json::from_str(&text).context("invalid JSON id list")?;
    let Value::Array(items) = value else {
        bail!("id list must be a JSON array");
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(id) => Ok(id),
            other => bail!("id list must contain only strings, got {other}"),
        })
        .collect()
}

/// Render the batch summary; collected chunk errors make the command fail
/// after the summary is printed.
fn finish_batch(out: &OutputOptions, outcome: BatchOutcome) -> anyhow::Result<()> {
    out.write(&json!({
        "succeeded": outcome.succeeded,
        "errors": outcome.errors
    }))?;

    if outcome.is_complete() {
        Ok(())
    } else {
        bail!(
            "batch completed with {} failed chunk(s)",
            outcome.errors.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_records_requires_array() {
        let err = load_records(Some("{\"a\":1}"), None).unwrap_err();
        assert!(err.to_string().contains("JSON array"));

        let records = load_records(Some("[{\"a\":1},{\"a\":2}]"), None).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_load_records_requires_a_source() {
        let err = load_records(None, None).unwrap_err();
        assert!(err.to_string().contains("--data or --file"));
    }

    #[test]
    fn test_load_ids_prefers_positional() {
        let ids = load_ids(vec!["a".into(), "b".into()], Some("/nonexistent")).unwrap();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_load_ids_rejects_non_strings() {
        let err = load_ids(vec![], None).unwrap_err();
        assert!(err.to_string().contains("missing record ids"));
    }

    #[test]
    fn test_payload_body_missing_everything() {
        let payload = PayloadArgs {
            data: None,
            file: None,
            set: vec![],
        };
        let err = payload_body(&payload).unwrap_err();
        assert!(err
            .to_string()
            .contains("missing JSON payload; use --data, --file, or --set"));
    }

    #[test]
    fn test_payload_body_setters_over_data() {
        let payload = PayloadArgs {
            data: Some("{\"name\":\"old\"}".into()),
            file: None,
            set: vec!["name=new".into(), "score=10".into()],
        };
        let body = payload_body(&payload).unwrap();
        assert_eq!(
            Value::Object(body),
            serde_json::json!({"name": "new", "score": 10})
        );
    }
}
