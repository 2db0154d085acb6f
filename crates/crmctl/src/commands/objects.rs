//! The `objects` command: list object definitions.

use crmctl_records::RecordsClient;
use serde_json::json;

use crate::output::OutputOptions;

pub async fn run(client: &RecordsClient, out: &OutputOptions) -> anyhow::Result<()> {
    let defs = client.object_defs().await?;
    out.write(&json!({ "data": { "objects": defs } }))
}
