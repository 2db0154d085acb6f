//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};
use crmctl_records::{BatchOptions, FailurePolicy, ListParams};

/// Main CLI structure
#[derive(Parser)]
#[command(name = "crmctl")]
#[command(about = "A command-line client for object-oriented CRM REST APIs")]
#[command(version)]
pub struct Cli {
    /// API base URL (overrides CRM_BASE_URL)
    #[arg(long, global = true, env = "CRM_BASE_URL")]
    pub base_url: Option<String>,

    /// API bearer token (overrides CRM_API_TOKEN)
    #[arg(long, global = true, env = "CRM_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format: json, yaml, csv, or table
    #[arg(short = 'o', long, global = true, default_value = "table")]
    pub output: String,

    /// Dot-path projection applied before rendering (e.g. data.people.0)
    #[arg(long = "jq", global = true, value_name = "PATH")]
    pub projection: Option<String>,

    /// Use the object name exactly as given; skip metadata resolution
    #[arg(long, global = true)]
    pub object_as_is: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level command categories
#[derive(Subcommand)]
pub enum Commands {
    /// List the object definitions known to the API
    Objects,

    /// Generic record operations for any object type, standard or custom
    #[command(subcommand)]
    Records(RecordsCommands),
}

/// Record-level subcommands
#[derive(Subcommand)]
pub enum RecordsCommands {
    /// List one page of records
    List {
        /// Object name, singular or plural, any case
        object: String,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Fetch every record, following the page cursor to the end
    Export {
        object: String,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Fetch a single record by id
    Get {
        object: String,
        id: String,

        /// Relation to include; any value requests depth=1
        #[arg(long)]
        include: Vec<String>,
    },

    /// Create a record from --data/--file/--set input
    Create {
        object: String,

        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Update a record by id
    Update {
        object: String,
        id: String,

        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Delete a record by id
    Delete { object: String, id: String },

    /// Chunked batch operations
    #[command(subcommand)]
    Batch(BatchCommands),
}

/// Batch subcommands
#[derive(Subcommand)]
pub enum BatchCommands {
    /// Create records from a JSON array payload
    Create {
        object: String,

        /// Inline JSON array
        #[arg(long)]
        data: Option<String>,

        /// File holding a JSON array; - reads stdin
        #[arg(long)]
        file: Option<String>,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Update records from a JSON array payload
    Update {
        object: String,

        /// Inline JSON array
        #[arg(long)]
        data: Option<String>,

        /// File holding a JSON array; - reads stdin
        #[arg(long)]
        file: Option<String>,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Soft-delete records by id
    Delete {
        object: String,

        /// Record ids
        ids: Vec<String>,

        /// File holding a JSON array of ids; - reads stdin
        #[arg(long)]
        file: Option<String>,

        /// Actually delete instead of printing a preview
        #[arg(long)]
        yes: bool,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Hard-delete records by id
    Destroy {
        object: String,

        /// Record ids
        ids: Vec<String>,

        /// File holding a JSON array of ids; - reads stdin
        #[arg(long)]
        file: Option<String>,

        /// Actually destroy instead of printing a preview
        #[arg(long)]
        yes: bool,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Restore soft-deleted records by id
    Restore {
        object: String,

        /// Record ids
        ids: Vec<String>,

        /// File holding a JSON array of ids; - reads stdin
        #[arg(long)]
        file: Option<String>,

        #[command(flatten)]
        batch: BatchArgs,
    },
}

/// Flags shared by list and export
#[derive(Args)]
pub struct QueryArgs {
    /// Page size; 0 leaves it to the server
    #[arg(long, default_value_t = 0)]
    pub limit: i64,

    /// Continuation cursor from a previous page
    #[arg(long, default_value = "")]
    pub cursor: String,

    /// Inline filter JSON
    #[arg(long, default_value = "")]
    pub filter: String,

    /// File holding filter JSON; - reads stdin
    #[arg(long)]
    pub filter_file: Option<String>,

    /// Sort field
    #[arg(long, default_value = "")]
    pub order_by: String,

    /// Sort direction
    #[arg(long = "direction", default_value = "")]
    pub order_direction: String,

    /// Field-selection string, passed through verbatim
    #[arg(long, default_value = "")]
    pub fields: String,

    /// Relation to include; any value requests depth=1
    #[arg(long)]
    pub include: Vec<String>,

    /// Extra key=value query parameter
    #[arg(long = "param")]
    pub params: Vec<String>,
}

impl QueryArgs {
    pub fn to_list_params(&self) -> ListParams {
        ListParams {
            limit: self.limit,
            cursor: self.cursor.clone(),
            filter: self.filter.clone(),
            filter_file: self.filter_file.clone(),
            order_by: self.order_by.clone(),
            order_direction: self.order_direction.clone(),
            fields: self.fields.clone(),
            include: self.include.clone(),
            raw: self.params.clone(),
        }
    }
}

/// Flags shared by single-record create and update
#[derive(Args)]
pub struct PayloadArgs {
    /// Inline JSON object
    #[arg(long)]
    pub data: Option<String>,

    /// File holding a JSON object; - reads stdin
    #[arg(long)]
    pub file: Option<String>,

    /// Dot-path field setter (a.b.c=value), repeatable, applied in order
    #[arg(long = "set", value_name = "PATH=VALUE")]
    pub set: Vec<String>,
}

/// Flags shared by all batch subcommands
#[derive(Args)]
pub struct BatchArgs {
    /// Records per request; 0 uses the API maximum of 60
    #[arg(long, default_value_t = 0)]
    pub chunk_size: i64,

    /// Keep going after a failed chunk and report a summary at the end
    #[arg(long)]
    pub continue_on_error: bool,
}

impl BatchArgs {
    pub fn to_options(&self) -> BatchOptions {
        BatchOptions {
            chunk_size: self.chunk_size,
            policy: if self.continue_on_error {
                FailurePolicy::Continue
            } else {
                FailurePolicy::Stop
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_list_with_query_flags() {
        let cli = Cli::parse_from([
            "crmctl",
            "records",
            "list",
            "people",
            "--limit",
            "10",
            "--filter",
            "{\"a\":1}",
            "--param",
            "view=kanban",
        ]);

        let Commands::Records(RecordsCommands::List { object, query }) = cli.command else {
            panic!("expected records list");
        };
        assert_eq!(object, "people");
        let params = query.to_list_params();
        assert_eq!(params.limit, 10);
        assert_eq!(params.raw, vec!["view=kanban".to_string()]);
    }

    #[test]
    fn test_parse_batch_flags() {
        let cli = Cli::parse_from([
            "crmctl",
            "records",
            "batch",
            "create",
            "people",
            "--data",
            "[]",
            "--chunk-size",
            "20",
            "--continue-on-error",
        ]);

        let Commands::Records(RecordsCommands::Batch(BatchCommands::Create { batch, .. })) =
            cli.command
        else {
            panic!("expected batch create");
        };
        let opts = batch.to_options();
        assert_eq!(opts.chunk_size, 20);
        assert_eq!(opts.policy, FailurePolicy::Continue);
    }

    #[test]
    fn test_global_flags_anywhere() {
        let cli = Cli::parse_from([
            "crmctl",
            "records",
            "get",
            "person",
            "p1",
            "--object-as-is",
            "-o",
            "json",
        ]);
        assert!(cli.object_as_is);
        assert_eq!(cli.output, "json");
    }
}
