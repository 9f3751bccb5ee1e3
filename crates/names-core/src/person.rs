//! Person — the denormalized aggregate served by the API.
//!
//! The public shape collapses NULL columns to empty strings; the storage
//! shape ([`PersonRecord`]) keeps them tri-state. The conversions between
//! the two are the only place that rule lives.

use serde::{Deserialize, Serialize};

/// A person with their nicknames and tags folded in.
///
/// `id` is assigned by storage and stays 0 until the person is persisted.
/// It is never serialized. Deserialization additionally accepts the batch
/// file spellings `description` and `reference_url` for the two renamed
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  #[serde(skip)]
  pub id:            i64,
  pub name:          String,
  #[serde(rename = "descr", alias = "description", default)]
  pub description:   String,
  #[serde(default)]
  pub source:        String,
  #[serde(default)]
  pub gender:        String,
  #[serde(rename = "ref", alias = "reference_url", default)]
  pub reference_url: String,
  #[serde(default)]
  pub nicknames:     Vec<String>,
  #[serde(default)]
  pub tags:          Vec<String>,
}

/// The `people` table row: optional columns are present-or-NULL rather than
/// empty-string-as-absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonRecord {
  pub id:            i64,
  pub name:          String,
  pub description:   Option<String>,
  pub source:        Option<String>,
  pub gender:        Option<String>,
  pub reference_url: Option<String>,
}

/// A `people_names` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknameRow {
  pub id:        i64,
  pub person_id: i64,
  pub name:      String,
}

/// A `people_tags` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRow {
  pub id:        i64,
  pub person_id: i64,
  pub tag:       String,
}

/// Top-level shape of the batch upload document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameFile {
  #[serde(default)]
  pub names: Vec<Person>,
}

impl PersonRecord {
  /// Collapse NULL columns to empty strings. Child lists start empty; the
  /// aggregate loader fills them in.
  pub fn into_person(self) -> Person {
    Person {
      id:            self.id,
      name:          self.name,
      description:   self.description.unwrap_or_default(),
      source:        self.source.unwrap_or_default(),
      gender:        self.gender.unwrap_or_default(),
      reference_url: self.reference_url.unwrap_or_default(),
      nicknames:     Vec::new(),
      tags:          Vec::new(),
    }
  }
}

impl Person {
  /// Build the storage row for this person.
  ///
  /// A column is stored only if the aggregate string is non-empty, so a
  /// field explicitly set to `""` cannot be told apart from one never set.
  pub fn to_record(&self) -> PersonRecord {
    fn column(s: &str) -> Option<String> {
      (!s.is_empty()).then(|| s.to_owned())
    }

    PersonRecord {
      id:            self.id,
      name:          self.name.clone(),
      description:   column(&self.description),
      source:        column(&self.source),
      gender:        column(&self.gender),
      reference_url: column(&self.reference_url),
    }
  }
}
