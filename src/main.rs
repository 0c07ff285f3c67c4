//! urlshort redirect server.
//!
//! ```text
//!     Client Request
//!     ─────────────▶ listener ─▶ middleware ─▶ RedirectDispatcher ─┬─ hit ──▶ 302 Found
//!                              (request id,     (exact lookup in    │
//!                               trace, timeout)  PathMapping)       └─ miss ─▶ fallback
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use urlshort::config::{load_config, validate_config, ConfigError, UrlshortConfig};
use urlshort::lifecycle::{
    bind_listener, build_server, report_failure, spawn_signal_handler, Shutdown,
};
use urlshort::observability::init_logging;

#[derive(Parser, Debug)]
#[command(name = "urlshort")]
#[command(about = "Redirect mapped paths, serve a fallback for everything else", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Redirect document (YAML, or JSON by .json extension); overrides the config.
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Bind address; overrides the config.
    #[arg(short, long)]
    bind: Option<String>,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<UrlshortConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => UrlshortConfig::default(),
        };

        if let Some(document) = &self.document {
            config.redirects.document = Some(document.clone());
        }
        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = cli.load_config();

    // A config that failed to load still gets its error logged, with default settings.
    let observability = loaded
        .as_ref()
        .map(|config| config.observability.clone())
        .unwrap_or_default();
    init_logging(&observability).context("initializing logging")?;
    tracing::info!("urlshort v{} starting", env!("CARGO_PKG_VERSION"));

    let config = report_failure("load configuration", loaded)?;
    tracing::info!(
        bind_address = %config.listener.bind_address,
        document = ?config.redirects.document,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let bind_address = config.listener.bind_address.clone();
    let server = report_failure("load redirects", build_server(config))?;
    let listener = bind_listener(&bind_address)
        .await
        .with_context(|| format!("binding {bind_address}"))?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    spawn_signal_handler(shutdown);

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
