//! `names-upload` — bulk-load people from a YAML file into the names store.
//!
//! # Usage
//!
//! ```
//! names-upload --people names.yaml --dbconf db.env
//! ```
//!
//! Entries whose name already exists in the store are skipped; existing rows
//! are never updated or removed. A per-row insert failure is logged and the
//! rest of the batch still runs, but the process exits nonzero if any row
//! failed.

mod envfile;

use std::{collections::HashMap, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use names_core::{person::NameFile, reconcile::reconcile};
use names_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "names-upload", about = "Upload a file of people names")]
struct Args {
  /// YAML file of people to upload.
  #[arg(long, value_name = "FILE")]
  people: PathBuf,

  /// KEY=VALUE file overriding store connection settings.
  #[arg(long, value_name = "FILE", default_value = "db.env")]
  dbconf: PathBuf,
}

/// Where the database lives: built-in default, overridden by the process
/// environment, overridden by the connection file.
fn resolve_store_path(
  process_env: Option<String>,
  file_conf: &HashMap<String, String>,
) -> PathBuf {
  let mut path = String::from("af_names.db");
  if let Some(value) = process_env {
    path = value;
  }
  if let Some(value) = file_conf.get("STORE_PATH") {
    path = value.clone();
  }
  PathBuf::from(path)
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  // Resolve the store location.
  let env_raw = std::fs::read_to_string(&args.dbconf)
    .with_context(|| format!("failed to read env file {}", args.dbconf.display()))?;
  let env_conf = envfile::parse_env_file(&env_raw);
  let store_path = resolve_store_path(
    std::env::var("NAMES_STORE_PATH").ok(),
    &env_conf,
  );

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {}", store_path.display()))?;

  // Load the data file with people data.
  let people_raw = std::fs::read_to_string(&args.people).with_context(|| {
    format!("failed to read people file {}", args.people.display())
  })?;
  let name_file: NameFile =
    serde_yaml::from_str(&people_raw).context("failed to parse people file")?;

  // Compare against the existing people and insert the genuinely new ones.
  let report = reconcile(&store, &name_file.names)
    .await
    .context("failed to load people from the database")?;

  tracing::info!(
    inserted = report.inserted.len(),
    skipped = report.skipped.len(),
    failed = report.failed.len(),
    "upload complete"
  );

  if !report.failed.is_empty() {
    anyhow::bail!(
      "{} of {} entries failed to insert",
      report.failed.len(),
      name_file.names.len()
    );
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use names_core::person::NameFile;

  use super::resolve_store_path;

  #[test]
  fn parses_the_batch_file_format() {
    let raw = r#"
names:
  - name: Grace
    description: rear admiral
    source: history
    gender: female
    reference_url: https://example.com/grace
    nicknames:
      - Amazing Grace
    tags:
      - math
  - name: Ada
"#;

    let file: NameFile = serde_yaml::from_str(raw).unwrap();
    assert_eq!(file.names.len(), 2);

    let grace = &file.names[0];
    assert_eq!(grace.name, "Grace");
    assert_eq!(grace.description, "rear admiral");
    assert_eq!(grace.source, "history");
    assert_eq!(grace.gender, "female");
    assert_eq!(grace.reference_url, "https://example.com/grace");
    assert_eq!(grace.nicknames, vec!["Amazing Grace"]);
    assert_eq!(grace.tags, vec!["math"]);

    // Absent fields default: id 0, empty strings and lists.
    let ada = &file.names[1];
    assert_eq!(ada.id, 0);
    assert_eq!(ada.description, "");
    assert!(ada.nicknames.is_empty());
    assert!(ada.tags.is_empty());
  }

  #[test]
  fn store_path_defaults_when_nothing_is_set() {
    let path = resolve_store_path(None, &HashMap::new());
    assert_eq!(path.to_str().unwrap(), "af_names.db");
  }

  #[test]
  fn process_env_overrides_the_default() {
    let path = resolve_store_path(Some("/var/env.db".into()), &HashMap::new());
    assert_eq!(path.to_str().unwrap(), "/var/env.db");
  }

  #[test]
  fn connection_file_overrides_the_process_env() {
    let file_conf =
      HashMap::from([("STORE_PATH".to_owned(), "/var/file.db".to_owned())]);
    let path = resolve_store_path(Some("/var/env.db".into()), &file_conf);
    assert_eq!(path.to_str().unwrap(), "/var/file.db");
  }
}
