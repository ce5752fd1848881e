//! Handlers for `/tips` endpoints other than SMS.
//!
//! | Method  | Path | Notes |
//! |---------|------|-------|
//! | `POST`  | `/tips/submit` | Body: [`AppSubmission`]; channel defaults to `app` |
//! | `POST`  | `/tips/submit/phone` | Body: [`PhoneSubmission`] |
//! | `GET`   | `/tips` | Optional `status`, `urgency`, `crimeType` |
//! | `GET`   | `/tips/statistics` | Aggregate counts |
//! | `GET`   | `/tips/:id` | 404 if not found |
//! | `PATCH` | `/tips/:id/status` | Body: `{"status":"reviewing"}` |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use tipline_core::{
  channel::{AppSubmission, PhoneSubmission},
  lifecycle::TipStatus,
  notify::Notifier,
  stats::Statistics,
  store::{TipQuery, TipStore},
  tip::{Channel, Tip, Urgency},
};
use tipline_sms::SmsSender;
use uuid::Uuid;

use crate::{ApiState, error::ApiError};

// ─── Submit ───────────────────────────────────────────────────────────────────

/// `POST /tips/submit` — returns 201 + the stored [`Tip`].
pub async fn submit<S, N, T>(
  State(state): State<ApiState<S, N, T>>,
  Json(body): Json<AppSubmission>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TipStore + 'static,
  N: Notifier,
  T: SmsSender,
{
  let tip = state.intake.submit_app(body, Channel::App).await?;
  Ok((StatusCode::CREATED, Json(tip)))
}

/// `POST /tips/submit/phone` — returns 201 + the stored [`Tip`].
pub async fn submit_phone<S, N, T>(
  State(state): State<ApiState<S, N, T>>,
  Json(body): Json<PhoneSubmission>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TipStore + 'static,
  N: Notifier,
  T: SmsSender,
{
  let tip = state.intake.submit_phone(body).await?;
  Ok((StatusCode::CREATED, Json(tip)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
  pub status:     Option<String>,
  pub urgency:    Option<String>,
  pub crime_type: Option<String>,
}

impl ListParams {
  /// Blank parameters are ignored. `None` means a filter names a status or
  /// urgency that no tip can have.
  fn to_query(&self) -> Option<TipQuery> {
    Some(TipQuery {
      status:     parse_filter::<TipStatus>(&self.status)?,
      urgency:    parse_filter::<Urgency>(&self.urgency)?,
      crime_type: non_blank(&self.crime_type).map(str::to_owned),
    })
  }
}

fn non_blank(param: &Option<String>) -> Option<&str> {
  param.as_deref().filter(|s| !s.is_empty())
}

fn parse_filter<V: std::str::FromStr>(
  param: &Option<String>,
) -> Option<Option<V>> {
  match non_blank(param) {
    None => Some(None),
    Some(s) => s.parse().ok().map(Some),
  }
}

/// `GET /tips[?status=...][&urgency=...][&crimeType=...]`
pub async fn list<S, N, T>(
  State(state): State<ApiState<S, N, T>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Tip>>, ApiError>
where
  S: TipStore + 'static,
  N: Notifier,
  T: SmsSender,
{
  let Some(query) = params.to_query() else {
    return Ok(Json(Vec::new()));
  };
  Ok(Json(state.intake.list(&query).await?))
}

// ─── Statistics ───────────────────────────────────────────────────────────────

/// `GET /tips/statistics`
pub async fn statistics<S, N, T>(
  State(state): State<ApiState<S, N, T>>,
) -> Result<Json<Statistics>, ApiError>
where
  S: TipStore + 'static,
  N: Notifier,
  T: SmsSender,
{
  Ok(Json(state.intake.statistics().await?))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// Ids are opaque to clients; anything that is not a UUID simply matches
/// nothing.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
  Uuid::parse_str(raw).map_err(|_| ApiError::NotFound("Tip not found".into()))
}

/// `GET /tips/:id`
pub async fn get_one<S, N, T>(
  State(state): State<ApiState<S, N, T>>,
  Path(id): Path<String>,
) -> Result<Json<Tip>, ApiError>
where
  S: TipStore + 'static,
  N: Notifier,
  T: SmsSender,
{
  let id = parse_id(&id)?;
  Ok(Json(state.intake.get(id).await?))
}

// ─── Status ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  #[serde(default)]
  pub status: String,
}

/// `PATCH /tips/:id/status` — body: `{"status":"investigating"}`
pub async fn update_status<S, N, T>(
  State(state): State<ApiState<S, N, T>>,
  Path(id): Path<String>,
  Json(body): Json<StatusBody>,
) -> Result<Json<Tip>, ApiError>
where
  S: TipStore + 'static,
  N: Notifier,
  T: SmsSender,
{
  let id = parse_id(&id)?;
  Ok(Json(state.intake.update_status(id, &body.status).await?))
}
