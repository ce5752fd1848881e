//! The `TipStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g.
//! `tipline-store-memory`). The intake service and the HTTP layer depend on
//! this abstraction, not on any concrete backend.

use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
  lifecycle::TipStatus,
  stats::Statistics,
  tip::{Tip, Urgency},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`TipStore::list`]. Every set filter must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipQuery {
  pub status:     Option<TipStatus>,
  pub urgency:    Option<Urgency>,
  pub crime_type: Option<String>,
}

impl TipQuery {
  pub fn matches(&self, tip: &Tip) -> bool {
    self.status.is_none_or(|s| tip.status() == s)
      && self.urgency.is_none_or(|u| tip.urgency() == u)
      && self
        .crime_type
        .as_deref()
        .is_none_or(|c| tip.crime_type() == c)
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a tip store backend.
///
/// Records are never deleted. The only mutation is a status change, which a
/// backend must apply as a single read-modify-write so concurrent updates to
/// one record cannot tear it.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait TipStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append an accepted tip. Must be atomic with respect to other appends.
  fn append(
    &self,
    tip: Tip,
  ) -> impl Future<Output = Result<Tip, Self::Error>> + Send + '_;

  /// Retrieve a tip by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Tip>, Self::Error>> + Send + '_;

  /// Set the status of a tip and return the updated record, or `None` if the
  /// id is unknown.
  fn set_status(
    &self,
    id: Uuid,
    status: TipStatus,
    at: DateTime<Utc>,
  ) -> impl Future<Output = Result<Option<Tip>, Self::Error>> + Send + '_;

  /// All tips matching `query`, in insertion order.
  fn list<'a>(
    &'a self,
    query: &'a TipQuery,
  ) -> impl Future<Output = Result<Vec<Tip>, Self::Error>> + Send + 'a;

  /// Counts computed from the current contents.
  fn statistics(
    &self,
  ) -> impl Future<Output = Result<Statistics, Self::Error>> + Send + '_;
}
