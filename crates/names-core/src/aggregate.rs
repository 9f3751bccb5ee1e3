//! Assembly of [`Person`] aggregates from normalized table rows.

use std::collections::BTreeMap;

use crate::{
  error::Error,
  person::{NicknameRow, Person, PersonRecord, TagRow},
  Result,
};

/// Fold base rows and their child rows into one aggregate per person.
///
/// The returned list is ordered by ascending person id, so two assemblies
/// over the same rows always agree. A child row whose `person_id` matches no
/// base row fails the whole assembly with [`Error::OrphanRow`].
pub fn assemble_people(
  records:   Vec<PersonRecord>,
  nicknames: Vec<NicknameRow>,
  tags:      Vec<TagRow>,
) -> Result<Vec<Person>> {
  let mut people: BTreeMap<i64, Person> = records
    .into_iter()
    .map(|record| (record.id, record.into_person()))
    .collect();

  for row in nicknames {
    let person = people.get_mut(&row.person_id).ok_or(Error::OrphanRow {
      table:     "people_names",
      person_id: row.person_id,
    })?;
    person.nicknames.push(row.name);
  }

  for row in tags {
    let person = people.get_mut(&row.person_id).ok_or(Error::OrphanRow {
      table:     "people_tags",
      person_id: row.person_id,
    })?;
    person.tags.push(row.tag);
  }

  Ok(people.into_values().collect())
}
