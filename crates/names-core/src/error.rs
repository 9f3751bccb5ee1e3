//! Error types for `names-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A nickname or tag row references a person id with no base row.
  #[error("{table} row references unknown person id {person_id}")]
  OrphanRow {
    table:     &'static str,
    person_id: i64,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
