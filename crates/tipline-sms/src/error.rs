//! Error types for outbound SMS.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("empty destination number")]
  EmptyDestination,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
