//! Error type for `names-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] names_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The driver reported row id 0 for a freshly inserted base row.
  #[error("invalid row id returned for new person {0:?}")]
  InvalidRowId(String),

  /// Attempted to update a person that was never persisted.
  #[error("cannot update person {0:?} without a storage-assigned id")]
  MissingId(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
