//! Roster configuration
//!
//! This module handles layered configuration loading from:
//! - Built-in defaults
//! - `<config_dir>/default.toml` (optional)
//! - Environment variables prefixed `CREW_ROSTER__` (e.g. `CREW_ROSTER__ROSTER__PAGE_SIZE=500`)
//!
//! Command-line flags, including the `WALLET_ADDRESS` and
//! `REMOTE_RPC_ENDPOINT` variables they read, are applied on top in `main`.
//! Configuration is read once at startup and never reloaded.

use ::config::{Config, ConfigError, Environment, File};
use crew_roster_core::{DEFAULT_COLLECTION_ID, DEFAULT_NAME_PREFIX};
use crew_roster_rpc::DEFAULT_RPC_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Owner used when no wallet address is configured
pub const DEFAULT_OWNER: &str = "1111111111111111111111111111111111111111111";

/// Complete roster configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Registry endpoint settings
    #[serde(default)]
    pub rpc: RpcConfig,

    /// Pipeline settings
    #[serde(default)]
    pub roster: RosterSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Registry endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Registry endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_endpoint() -> String {
    DEFAULT_RPC_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSettings {
    /// Wallet whose crew is listed
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Collection the crew belongs to
    #[serde(default = "default_collection_id")]
    pub collection_id: String,

    /// Prefix stripped from display names
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,

    /// Assets requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Upper bound on pages fetched
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

fn default_owner() -> String {
    DEFAULT_OWNER.to_string()
}

fn default_collection_id() -> String {
    DEFAULT_COLLECTION_ID.to_string()
}

fn default_name_prefix() -> String {
    DEFAULT_NAME_PREFIX.to_string()
}

fn default_page_size() -> u32 {
    crew_roster_service::DEFAULT_PAGE_SIZE
}

fn default_max_pages() -> u32 {
    crew_roster_service::DEFAULT_MAX_PAGES
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            collection_id: default_collection_id(),
            name_prefix: default_name_prefix(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON formatting
    #[serde(default)]
    pub json_format: bool,

    /// Include target module
    #[serde(default)]
    pub include_target: bool,

    /// Include thread IDs
    #[serde(default)]
    pub include_thread_ids: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
            include_target: false,
            include_thread_ids: false,
        }
    }
}

impl RosterConfig {
    /// Load configuration from `config_dir` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a present file or variable cannot be parsed
    pub fn load(config_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let config_dir = config_dir.into();

        let config = Config::builder()
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(
                Environment::with_prefix("CREW_ROSTER").separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration, falling back to defaults on failure
    pub fn load_or_default(config_dir: impl Into<PathBuf>) -> Self {
        Self::load(config_dir).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load configuration: {}", e);
            eprintln!("Using default configuration");
            Self::default()
        })
    }
}
