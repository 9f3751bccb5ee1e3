//! Handler for `/names/people`.

use std::sync::Arc;

use axum::{extract::State, Json};
use names_core::{person::Person, store::NameStore};

use crate::error::ApiError;

/// `GET /names/people` — every person with nicknames and tags populated.
///
/// The `id` field is not serialized.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: NameStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let people = store
    .load_people()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(people))
}
