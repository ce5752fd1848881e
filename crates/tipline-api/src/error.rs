//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tipline_core::validate::Violation;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// The submission broke one or more field rules; all are reported.
  #[error("validation failed")]
  Validation(Vec<Violation>),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<tipline_core::Error> for ApiError {
  fn from(e: tipline_core::Error) -> Self {
    use tipline_core::Error as E;
    match e {
      E::ValidationFailed(violations) => ApiError::Validation(violations),
      E::TipNotFound(_) => ApiError::NotFound("Tip not found".to_owned()),
      E::InvalidStatus(_) => ApiError::BadRequest("Invalid status".to_owned()),
      // Not returned by the intake service, which reports bad tags as
      // violations; mapped only to keep the match exhaustive.
      other @ (E::UnknownUrgency(_) | E::UnknownChannel(_)) => {
        ApiError::BadRequest(other.to_string())
      }
      E::Store(inner) => ApiError::Store(inner),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "error": m }))).into_response()
      }
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Validation(violations) => {
        let message = tipline_core::Error::ValidationFailed(violations.clone())
          .to_string();
        (
          StatusCode::BAD_REQUEST,
          Json(json!({ "error": message, "violations": violations })),
        )
          .into_response()
      }
      ApiError::Store(e) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
      )
        .into_response(),
    }
  }
}
