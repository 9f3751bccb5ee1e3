//! The [`NameStore`] trait.
//!
//! The trait is implemented by storage backends (e.g. `names-store-sqlite`).
//! Higher layers (`names-api`, `names-upload`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::person::Person;

/// Abstraction over a names store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait NameStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load every person with nicknames and tags populated, ordered by
  /// ascending id.
  ///
  /// Any underlying query failure aborts the whole load; partial results
  /// are never returned.
  fn load_people(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Persist a new person together with their nickname and tag rows.
  /// Returns the stored aggregate with its assigned id.
  fn insert_person(
    &self,
    person: Person,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Overwrite `current`'s scalar fields with `desired`'s and bring the
  /// child rows in line: values present only in `desired` are inserted,
  /// values present only in `current` are deleted. `current` must carry a
  /// storage-assigned id.
  fn update_person(
    &self,
    current: Person,
    desired: Person,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Count of base rows; used as a startup connectivity probe.
  fn count_people(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
