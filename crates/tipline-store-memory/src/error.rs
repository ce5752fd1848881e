//! Error type for `tipline-store-memory`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// An append carried an id that is already stored.
  #[error("tip {0} already exists")]
  DuplicateId(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
