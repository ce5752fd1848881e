//! HTTP host for the Tipline intake API.
//!
//! Mounts [`tipline_api::api_router`] under `/api`, adds a health check, and
//! wraps everything in request tracing.

use std::path::Path;

use anyhow::Context as _;
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use serde_json::{Value, json};
use tipline_api::{ApiState, api_router};
use tipline_core::{notify::Notifier, store::TipStore};
use tipline_sms::SmsSender;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `TIPLINE_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:               String,
  pub port:               u16,
  /// Shown as the sender of outbound SMS.
  pub sms_sender_id:      String,
  /// Comma-separated numbers paged about critical tips.
  pub police_sms_numbers: String,
}

impl ServerConfig {
  /// Load from `path` (optional) with environment overrides on top.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 3000)?
      .set_default("sms_sender_id", "CrimeTips")?
      .set_default("police_sms_numbers", "")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("TIPLINE"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router.
pub fn router<S, N, T>(state: ApiState<S, N, T>) -> Router
where
  S: TipStore + 'static,
  N: Notifier,
  T: SmsSender,
{
  Router::new()
    .route("/health", get(health))
    .nest("/api", api_router(state))
    .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> {
  Json(json!({ "status": "OK", "message": "Crime Prevention API is running" }))
}

// ─── Integration tests ────────────────────────────────────────────────────────
