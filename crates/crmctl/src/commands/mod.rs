//! Command dispatch and client construction.

use anyhow::Context;
use crmctl_client::Credentials;
use crmctl_records::RecordsClient;

use crate::cli::{Cli, Commands};
use crate::output::{Format, OutputOptions};

mod objects;
mod records;

/// Run the parsed command line to completion.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let out = OutputOptions {
        format: Format::parse(&cli.output),
        projection: cli.projection.clone(),
    };
    let client = build_client(&cli)?;

    match cli.command {
        Commands::Objects => objects::run(&client, &out).await,
        Commands::Records(command) => {
            records::run(&client, command, &out, cli.object_as_is).await
        }
    }
}

fn build_client(cli: &Cli) -> anyhow::Result<RecordsClient> {
    let base_url = cli
        .base_url
        .clone()
        .context("base URL not set; use --base-url or CRM_BASE_URL")?;
    let token = cli
        .token
        .clone()
        .context("API token not set; use --token or CRM_API_TOKEN")?;

    let credentials = Credentials::new(base_url, token)?;
    Ok(RecordsClient::new(credentials)?)
}
