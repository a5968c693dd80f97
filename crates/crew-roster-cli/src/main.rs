//! crew-roster
//!
//! Lists the crew numbers held by a wallet: fetches the wallet's assets from a
//! DAS registry, keeps the crew collection, and prints the sorted numbers one
//! per line on stdout.

mod config;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use crew_roster_core::CollectionId;
use crew_roster_rpc::{DasRpcClient, RpcClientConfig, RPC_ENDPOINT_ENV};
use crew_roster_service::RosterPipeline;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use url::Url;

use crate::config::RosterConfig;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The owner wallet address
    #[arg(long, env = "WALLET_ADDRESS")]
    owner: Option<String>,

    /// DAS registry endpoint
    #[arg(long, env = RPC_ENDPOINT_ENV)]
    rpc_endpoint: Option<String>,

    /// Collection the crew belongs to
    #[arg(long)]
    collection: Option<String>,

    /// Prefix stripped from asset names before parsing the number
    #[arg(long)]
    name_prefix: Option<String>,

    /// Assets requested per page (1-1000)
    #[arg(long)]
    page_size: Option<u32>,

    /// Configuration directory
    #[arg(short, long, env = "CONFIG_DIR", default_value = "config")]
    config_dir: String,

    /// Log level
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Args {
    /// Apply command-line overrides on top of loaded configuration
    fn apply(self, config: &mut RosterConfig) {
        if let Some(owner) = self.owner {
            config.roster.owner = owner;
        }
        if let Some(endpoint) = self.rpc_endpoint {
            config.rpc.endpoint = endpoint;
        }
        if let Some(collection) = self.collection {
            config.roster.collection_id = collection;
        }
        if let Some(prefix) = self.name_prefix {
            config.roster.name_prefix = prefix;
        }
        if let Some(page_size) = self.page_size {
            config.roster.page_size = page_size;
        }
        if let Some(log_level) = self.log_level {
            config.logging.level = log_level;
        }
        if self.log_json {
            config.logging.json_format = true;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = RosterConfig::load_or_default(&args.config_dir);
    args.apply(&mut config);

    telemetry::init_with_config(
        telemetry::TelemetryConfig::new()
            .with_log_level(config.logging.level.clone())
            .with_json_format(config.logging.json_format)
            .with_target(config.logging.include_target)
            .with_thread_ids(config.logging.include_thread_ids),
    );

    info!("Registry: {}", mask_endpoint(&config.rpc.endpoint));
    info!("Owner: {}", config.roster.owner);

    let pipeline = build_pipeline(&config)?;

    let mut stdout = std::io::stdout().lock();
    let count = pipeline
        .run_and_emit(&config.roster.owner, &mut stdout)
        .await
        .with_context(|| format!("Failed to list crew for {}", config.roster.owner))?;

    info!("Listed {} crew members", count);
    Ok(())
}

/// Build the registry client and roster pipeline from configuration
fn build_pipeline(config: &RosterConfig) -> Result<RosterPipeline> {
    let client_config = RpcClientConfig::new(&config.rpc.endpoint)
        .timeout(Duration::from_secs(config.rpc.timeout_seconds));
    let client = DasRpcClient::new(client_config).context("Invalid registry configuration")?;

    let collection =
        CollectionId::new(&config.roster.collection_id).context("Invalid collection id")?;

    RosterPipeline::builder(Arc::new(client))
        .collection(collection)
        .name_prefix(&config.roster.name_prefix)
        .page_size(config.roster.page_size)
        .max_pages(config.roster.max_pages)
        .build()
        .context("Invalid roster configuration")
}

/// Mask query parameters of an endpoint URL for logging
///
/// Hosted DAS providers commonly carry the API key in the query string.
fn mask_endpoint(endpoint: &str) -> String {
    match Url::parse(endpoint) {
        Ok(mut url) if url.query().is_some() => {
            url.set_query(Some("***"));
            url.to_string()
        }
        _ => endpoint.to_string(),
    }
}
