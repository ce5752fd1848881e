//! JSON REST API for Tipline.
//!
//! Exposes an axum [`Router`] backed by any [`tipline_core::store::TipStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", tipline_api::api_router(state))
//! ```

pub mod error;
pub mod sms;
pub mod tips;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, patch, post},
};
use tipline_core::{intake::IntakeService, notify::Notifier, store::TipStore};
use tipline_sms::SmsSender;

pub use error::ApiError;

/// Shared state threaded through all handlers.
pub struct ApiState<S, N, T> {
  pub intake: IntakeService<S, N>,
  /// Carries replies back to SMS tipsters.
  pub sms:    Arc<T>,
}

impl<S, N, T> Clone for ApiState<S, N, T> {
  fn clone(&self) -> Self {
    Self {
      intake: self.intake.clone(),
      sms:    Arc::clone(&self.sms),
    }
  }
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, N, T>(state: ApiState<S, N, T>) -> Router<()>
where
  S: TipStore + 'static,
  N: Notifier,
  T: SmsSender,
{
  Router::new()
    // Submission
    .route("/tips/submit", post(tips::submit::<S, N, T>))
    .route("/tips/submit/sms", post(sms::submit::<S, N, T>))
    .route("/tips/submit/phone", post(tips::submit_phone::<S, N, T>))
    // Dashboard
    .route("/tips", get(tips::list::<S, N, T>))
    .route("/tips/statistics", get(tips::statistics::<S, N, T>))
    .route("/tips/{id}", get(tips::get_one::<S, N, T>))
    .route("/tips/{id}/status", patch(tips::update_status::<S, N, T>))
    .with_state(state)
}
