//! Job Order Store Binary
//!
//! Lists, reads, creates and updates job orders through the configured
//! backend.
//!
//! # Usage
//!
//! ```bash
//! job-order-store list
//! job-order-store get 4fzyo82mv
//! job-order-store create --generate-id '{"customer":"Acme","status":"new"}'
//! job-order-store update '{"id":"4fzyo82mv","customer":"Acme","status":"done"}'
//! job-order-store new-id --uuid
//! ```
//!
//! # Environment Variables
//!
//! - `ORDER_STORE_CONFIG`: Config file path (default: order-store.yaml)
//! - `RUST_LOG`: Log filter (default: from config, else info)

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::Path;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

use job_order_store::config::{self, Config, DEFAULT_CONFIG_PATH};
use job_order_store::{Container, JobOrder, OrderStore, WriteOutcome, telemetry};

#[derive(Debug, Parser)]
#[command(name = "job-order-store", version, about = "Job order persistence")]
struct Cli {
    /// Configuration file.
    #[arg(long, global = true, env = "ORDER_STORE_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every order as a JSON array.
    List,
    /// Print one order by id.
    Get {
        /// Order id.
        id: String,
    },
    /// Append an order given as a JSON object.
    Create {
        /// The order as JSON.
        order: String,
        /// Assign a generated id when the JSON has none.
        #[arg(long)]
        generate_id: bool,
        /// Use a UUID when generating the id.
        #[arg(long, requires = "generate_id")]
        uuid: bool,
    },
    /// Replace an order given as a JSON object.
    Update {
        /// The order as JSON, including its id.
        order: String,
    },
    /// Print a freshly generated id.
    NewId {
        /// Generate a UUID instead of a short id.
        #[arg(long)]
        uuid: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = load(cli.config.as_deref())?;
    telemetry::init_tracing(&config.observability.logging);

    match cli.command {
        Command::NewId { uuid } => println!("{}", new_id(uuid)),
        Command::List => {
            let orders = open_store(&config)?.get_all_orders().await;
            println!("{}", serde_json::to_string_pretty(&orders)?);
        }
        Command::Get { id } => {
            let Some(order) = open_store(&config)?.get_order_by_id(&id).await else {
                bail!("No order with id '{id}'");
            };
            println!("{}", serde_json::to_string_pretty(&order)?);
        }
        Command::Create {
            order,
            generate_id,
            uuid,
        } => {
            let mut value = parse_object(&order)?;
            if generate_id {
                fill_missing_id(&mut value, uuid);
            }
            let order: JobOrder = serde_json::from_value(Value::Object(value))
                .context("Order must carry a string 'id'")?;
            let outcome = open_store(&config)?.create_order(&order).await?;
            report(&order, outcome);
        }
        Command::Update { order } => {
            let order: JobOrder = serde_json::from_value(Value::Object(parse_object(&order)?))
                .context("Order must carry a string 'id'")?;
            let outcome = open_store(&config)?.update_order(&order).await?;
            report(&order, outcome);
        }
    }

    Ok(())
}

/// Load the explicit config, the default file when present, or defaults.
fn load(path: Option<&str>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Ok(config::load_config(Some(path))?),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => Ok(config::load_config(None)?),
        None => Ok(Config::default()),
    }
}

fn open_store(config: &Config) -> anyhow::Result<OrderStore> {
    Ok(Container::from_config(&config.store)
        .context("Failed to build order backend")?
        .order_store())
}

fn parse_object(raw: &str) -> anyhow::Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw).context("Order is not valid JSON")? {
        Value::Object(map) => Ok(map),
        _ => bail!("Order must be a JSON object"),
    }
}

fn new_id(uuid: bool) -> String {
    if uuid {
        OrderStore::generate_uuid().into_inner()
    } else {
        OrderStore::generate_id().into_inner()
    }
}

/// Assign a generated id when `id` is absent or null.
fn fill_missing_id(value: &mut Map<String, Value>, uuid: bool) {
    if matches!(value.get("id"), None | Some(Value::Null)) {
        value.insert("id".to_string(), Value::String(new_id(uuid)));
    }
}

fn report(order: &JobOrder, outcome: WriteOutcome) {
    if !outcome.is_confirmed() {
        tracing::warn!(
            order_id = %order.id,
            "Write sent without confirmation; run `get` to verify"
        );
    }
    println!("{} {outcome}", order.id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_id_is_replaced() {
        let mut value = parse_object(r#"{"id": null, "customer": "Acme"}"#).unwrap();
        fill_missing_id(&mut value, false);

        let order: JobOrder = serde_json::from_value(Value::Object(value)).unwrap();
        assert_eq!(order.id.as_str().len(), job_order_store::domain::job_order::SHORT_ID_LEN);
        assert_eq!(order.field("customer"), Some(&json!("Acme")));
    }

    #[test]
    fn absent_id_gets_uuid() {
        let mut value = parse_object(r#"{"customer": "Acme"}"#).unwrap();
        fill_missing_id(&mut value, true);

        let id = value["id"].as_str().unwrap();
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn present_id_is_kept() {
        let mut value = parse_object(r#"{"id": "keep"}"#).unwrap();
        fill_missing_id(&mut value, false);
        assert_eq!(value["id"], json!("keep"));
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(parse_object("[1, 2]").is_err());
        assert!(parse_object("not json").is_err());
    }
}
