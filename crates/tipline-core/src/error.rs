//! Error types for `tipline-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::validate::Violation;

#[derive(Debug, Error)]
pub enum Error {
  /// One or more field rules failed; carries every violation, in rule order.
  #[error("{}", join_violations(.0))]
  ValidationFailed(Vec<Violation>),

  #[error("tip not found: {0}")]
  TipNotFound(Uuid),

  #[error("invalid status: {0:?}")]
  InvalidStatus(String),

  #[error("unknown urgency level: {0:?}")]
  UnknownUrgency(String),

  #[error("unknown submission channel: {0:?}")]
  UnknownChannel(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

fn join_violations(violations: &[Violation]) -> String {
  violations
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join(", ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
