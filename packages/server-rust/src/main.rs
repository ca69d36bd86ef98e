//! `CampusHub` server binary.
//!
//! Builds the record store, applies the seed, and serves the portal API
//! until interrupted.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use campushub_server::network::{NetworkModule, ServerConfig, TlsConfig};
use campushub_server::{PortalStore, Seed, UuidGenerator};

#[derive(Debug, Parser)]
#[command(name = "campushub-server", about = "Student-portal dashboard API")]
struct Cli {
    /// Bind address.
    #[arg(long, env = "CAMPUSHUB_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on. 0 means OS-assigned.
    #[arg(long, env = "CAMPUSHUB_PORT", default_value_t = 4000)]
    port: u16,

    /// JSON seed file to load instead of the built-in sample campus.
    #[arg(long, env = "CAMPUSHUB_SEED")]
    seed: Option<PathBuf>,

    /// Start with an empty store instead of any seed.
    #[arg(long, conflicts_with = "seed")]
    no_seed: bool,

    /// Allowed CORS origin; repeat for several. Defaults to any origin.
    #[arg(long = "cors-origin", default_value = "*")]
    cors_origins: Vec<String>,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    request_timeout_secs: u64,

    /// TLS certificate path; requires --tls-key.
    #[arg(long, requires = "tls_key")]
    tls_cert: Option<PathBuf>,

    /// TLS private key path; requires --tls-cert.
    #[arg(long, requires = "tls_cert")]
    tls_key: Option<PathBuf>,
}

impl Cli {
    fn server_config(&self) -> ServerConfig {
        let tls = match (&self.tls_cert, &self.tls_key) {
            (Some(cert), Some(key)) => Some(TlsConfig {
                cert_path: cert.clone(),
                key_path: key.clone(),
            }),
            _ => None,
        };
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            tls,
            cors_origins: self.cors_origins.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    fn load_seed(&self) -> Result<Option<Seed>> {
        if self.no_seed {
            return Ok(None);
        }
        match &self.seed {
            Some(path) => Ok(Some(Seed::from_path(path)?)),
            None => Ok(Some(Seed::sample())),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let store = Arc::new(PortalStore::new(Arc::new(UuidGenerator)));
    if let Some(seed) = cli.load_seed()? {
        store.apply_seed(seed);
    }
    info!(records = store.record_count(), "store initialized");

    let mut module = NetworkModule::new(cli.server_config(), store);
    let port = module.start().await?;
    info!(port, "portal API listening");

    module
        .serve(async {
            // Serve until interrupted.
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await
}
