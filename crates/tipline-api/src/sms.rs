//! Handler for `POST /tips/submit/sms`.
//!
//! The body is the normalised `{from, message}` pair; turning a provider's
//! webhook into that shape happens upstream. Replies to the sender go out on
//! a detached task and never change the HTTP result.

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use tipline_core::{
  channel::SmsMessage,
  intake::SmsIntake,
  notify::Notifier,
  store::TipStore,
  tip::Tip,
};
use tipline_sms::{SmsSender, confirmation_text, help_text};
use tracing::warn;

use crate::{ApiState, error::ApiError};

/// Body returned for SMS submissions that were not validation failures.
#[derive(Debug, Serialize)]
pub struct SmsReply {
  pub accepted: bool,
  pub message:  &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tip:      Option<Tip>,
}

/// `POST /tips/submit/sms`
///
/// - tip accepted → 201, confirmation texted back
/// - not in tip format → 200 with `accepted: false`, usage help texted back
/// - in tip format but invalid → 400, like any other rejected submission
pub async fn submit<S, N, T>(
  State(state): State<ApiState<S, N, T>>,
  Json(sms): Json<SmsMessage>,
) -> Result<Response, ApiError>
where
  S: TipStore + 'static,
  N: Notifier,
  T: SmsSender,
{
  match state.intake.submit_sms(&sms).await? {
    SmsIntake::Accepted(tip) => {
      reply(&state, sms.from, confirmation_text(tip.id()));
      let body = SmsReply {
        accepted: true,
        message:  "SMS tip received",
        tip:      Some(tip),
      };
      Ok((StatusCode::CREATED, Json(body)).into_response())
    }
    SmsIntake::UnrecognizedFormat => {
      reply(&state, sms.from, help_text());
      let body = SmsReply {
        accepted: false,
        message:  "Invalid tip format",
        tip:      None,
      };
      Ok((StatusCode::OK, Json(body)).into_response())
    }
  }
}

fn reply<S, N, T: SmsSender>(state: &ApiState<S, N, T>, to: String, body: String) {
  let sender = std::sync::Arc::clone(&state.sms);
  tokio::spawn(async move {
    if let Err(e) = sender.send(&to, &body).await {
      warn!(%to, "sms reply failed: {e}");
    }
  });
}
