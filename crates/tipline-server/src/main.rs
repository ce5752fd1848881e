//! tipline-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), layers
//! `TIPLINE_*` environment variables over it, and serves the tip intake API
//! over HTTP from an in-memory store.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use tipline_api::ApiState;
use tipline_core::intake::IntakeService;
use tipline_server::ServerConfig;
use tipline_sms::{LogSender, PoliceAlert};
use tipline_store_memory::MemoryStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Tipline crime-tip intake server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let server_cfg = ServerConfig::load(&cli.config)?;

  let sms = Arc::new(LogSender::new(server_cfg.sms_sender_id.clone()));
  let alert = PoliceAlert::from_list(
    Arc::clone(&sms),
    &server_cfg.police_sms_numbers,
  );
  if alert.numbers().is_empty() {
    tracing::warn!("no police numbers configured; critical tips are only logged");
  }

  let state = ApiState {
    intake: IntakeService::new(Arc::new(MemoryStore::new()), Arc::new(alert)),
    sms,
  };

  let app = tipline_server::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
