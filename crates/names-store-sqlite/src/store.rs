//! [`SqliteStore`] — the SQLite implementation of [`NameStore`].

use std::{collections::HashSet, path::Path};

use names_core::{
  aggregate::assemble_people,
  person::{NicknameRow, Person, PersonRecord, TagRow},
  store::NameStore,
};

use crate::{schema::SCHEMA, Error, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A names store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Values present in `want` but missing from `have`, keeping `want`'s order.
fn set_difference(want: &[String], have: &[String]) -> Vec<String> {
  let have: HashSet<&str> = have.iter().map(String::as_str).collect();
  want
    .iter()
    .filter(|value| !have.contains(value.as_str()))
    .cloned()
    .collect()
}

// ─── NameStore impl ──────────────────────────────────────────────────────────

impl NameStore for SqliteStore {
  type Error = Error;

  async fn load_people(&self) -> Result<Vec<Person>> {
    let (records, nicknames, tags) = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT id, name, descr, source, gender, ref FROM people")?;
        let records = stmt
          .query_map([], |row| {
            Ok(PersonRecord {
              id:            row.get(0)?,
              name:          row.get(1)?,
              description:   row.get(2)?,
              source:        row.get(3)?,
              gender:        row.get(4)?,
              reference_url: row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt =
          conn.prepare("SELECT id, person_id, name FROM people_names")?;
        let nicknames = stmt
          .query_map([], |row| {
            Ok(NicknameRow {
              id:        row.get(0)?,
              person_id: row.get(1)?,
              name:      row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt =
          conn.prepare("SELECT id, person_id, tag FROM people_tags")?;
        let tags = stmt
          .query_map([], |row| {
            Ok(TagRow {
              id:        row.get(0)?,
              person_id: row.get(1)?,
              tag:       row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((records, nicknames, tags))
      })
      .await?;

    Ok(assemble_people(records, nicknames, tags)?)
  }

  async fn insert_person(&self, person: Person) -> Result<Person> {
    let mut stored = person.clone();
    let record = person.to_record();
    let Person { name, nicknames, tags, .. } = person;

    let id = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        tx.execute(
          "INSERT INTO people (name, descr, source, gender, ref)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            record.name,
            record.description,
            record.source,
            record.gender,
            record.reference_url,
          ],
        )?;

        let id = tx.last_insert_rowid();
        if id == 0 {
          // Dropping the open transaction rolls the base row back, so no
          // child rows are ever written for an unusable id.
          return Ok(Err(Error::InvalidRowId(name)));
        }

        for tag in &tags {
          tx.execute(
            "INSERT INTO people_tags (person_id, tag) VALUES (?1, ?2)",
            rusqlite::params![id, tag],
          )?;
        }
        for nickname in &nicknames {
          tx.execute(
            "INSERT INTO people_names (person_id, name) VALUES (?1, ?2)",
            rusqlite::params![id, nickname],
          )?;
        }

        tx.commit()?;
        Ok(Ok(id))
      })
      .await??;

    stored.id = id;
    Ok(stored)
  }

  async fn update_person(&self, current: Person, desired: Person) -> Result<()> {
    if current.id == 0 {
      return Err(Error::MissingId(current.name));
    }

    let id = current.id;
    let record = desired.to_record();
    let nick_additions = set_difference(&desired.nicknames, &current.nicknames);
    let nick_removals = set_difference(&current.nicknames, &desired.nicknames);
    let tag_additions = set_difference(&desired.tags, &current.tags);
    let tag_removals = set_difference(&current.tags, &desired.tags);

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        tx.execute(
          "UPDATE people SET name = ?1, descr = ?2, source = ?3, gender = ?4, ref = ?5
           WHERE id = ?6",
          rusqlite::params![
            record.name,
            record.description,
            record.source,
            record.gender,
            record.reference_url,
            id,
          ],
        )?;

        for name in &nick_additions {
          tx.execute(
            "INSERT INTO people_names (person_id, name) VALUES (?1, ?2)",
            rusqlite::params![id, name],
          )?;
        }
        for name in &nick_removals {
          tx.execute(
            "DELETE FROM people_names WHERE person_id = ?1 AND name = ?2",
            rusqlite::params![id, name],
          )?;
        }

        for tag in &tag_additions {
          tx.execute(
            "INSERT INTO people_tags (person_id, tag) VALUES (?1, ?2)",
            rusqlite::params![id, tag],
          )?;
        }
        for tag in &tag_removals {
          tx.execute(
            "DELETE FROM people_tags WHERE person_id = ?1 AND tag = ?2",
            rusqlite::params![id, tag],
          )?;
        }

        tx.commit()?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn count_people(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM people", [], |row| row.get(0))?)
      })
      .await?;
    Ok(count as u64)
  }
}
