//! Server configuration from the command line and environment

use std::path::PathBuf;

use clap::Parser;

/// Contact book server
#[derive(Debug, Clone, Parser)]
#[command(name = "contacts", version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "CONTACTS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// SQLite database file; contacts are kept in memory when omitted
    #[arg(long, env = "CONTACTS_DB")]
    pub database: Option<PathBuf>,

    /// Load sample contacts into an empty store
    #[arg(long, env = "CONTACTS_SEED")]
    pub seed: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            database: None,
            seed: false,
            log_level: "info".to_string(),
        }
    }
}
