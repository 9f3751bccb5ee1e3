//! Batch reconciliation — diff a desired list of people against the store.

use std::collections::HashSet;

use crate::{person::Person, store::NameStore};

/// Outcome of [`reconcile`]; each bucket holds person names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
  pub inserted: Vec<String>,
  pub skipped:  Vec<String>,
  pub failed:   Vec<String>,
}

/// Insert every person from `desired` whose name is not already present in
/// the store.
///
/// Name matching is exact and case-sensitive. Matching entries are skipped;
/// existing rows are never updated or removed. A failed insert is logged,
/// recorded in the report, and does not stop the remaining entries — only
/// the initial load can fail the call as a whole.
pub async fn reconcile<S: NameStore>(
  store:   &S,
  desired: &[Person],
) -> Result<ReconcileReport, S::Error> {
  let existing = store.load_people().await?;
  let existing_names: HashSet<&str> =
    existing.iter().map(|p| p.name.as_str()).collect();

  let mut report = ReconcileReport::default();
  for person in desired {
    if existing_names.contains(person.name.as_str()) {
      tracing::info!(name = %person.name, "person already present, skipping");
      report.skipped.push(person.name.clone());
      continue;
    }

    match store.insert_person(person.clone()).await {
      Ok(stored) => {
        tracing::info!(name = %stored.name, id = stored.id, "uploaded new person");
        report.inserted.push(stored.name);
      }
      Err(error) => {
        tracing::error!(name = %person.name, %error, "failed to insert new person");
        report.failed.push(person.name.clone());
      }
    }
  }

  Ok(report)
}
