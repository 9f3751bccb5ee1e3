//! JSON REST API for the names service.
//!
//! Exposes an axum [`Router`] backed by any [`names_core::store::NameStore`].
//! Transport concerns (listener, timeouts, TLS) are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = names_api::api_router(store.clone());
//! ```

pub mod error;
pub mod people;

use std::sync::Arc;

use axum::{routing::get, Router};
use names_core::store::NameStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: NameStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/names/people", get(people::list::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use names_core::person::Person;
  use names_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  async fn oneshot_get(
    router: Router<()>,
    uri: &str,
  ) -> axum::response::Response {
    let req = Request::builder()
      .method("GET")
      .uri(uri)
      .body(Body::empty())
      .unwrap();
    router.oneshot(req).await.unwrap()
  }

  async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap()
      .to_vec()
  }

  #[tokio::test]
  async fn get_people_on_empty_store_returns_empty_array() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let resp =
      oneshot_get(api_router(Arc::new(store)), "/names/people").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!([]));
  }

  #[tokio::test]
  async fn get_people_serializes_the_wire_field_names() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut ada = Person { name: "Ada".into(), ..Person::default() };
    ada.description = "first programmer".into();
    ada.reference_url = "https://example.com/ada".into();
    ada.nicknames = vec!["Countess".into()];
    ada.tags = vec!["math".into()];
    store.insert_person(ada).await.unwrap();

    let resp =
      oneshot_get(api_router(Arc::new(store)), "/names/people").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_bytes(resp).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let entry = &json.as_array().unwrap()[0];

    assert_eq!(entry["name"], "Ada");
    assert_eq!(entry["descr"], "first programmer");
    assert_eq!(entry["ref"], "https://example.com/ada");
    assert_eq!(entry["nicknames"], serde_json::json!(["Countess"]));
    assert_eq!(entry["tags"], serde_json::json!(["math"]));
    // The storage id never leaves the process.
    assert!(entry.get("id").is_none());
  }

  #[tokio::test]
  async fn unknown_path_returns_404() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let resp = oneshot_get(api_router(Arc::new(store)), "/names/places").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  // ── Failing store ───────────────────────────────────────────────────────────

  #[derive(Clone)]
  struct FailStore;

  impl NameStore for FailStore {
    type Error = std::io::Error;

    async fn load_people(&self) -> Result<Vec<Person>, Self::Error> {
      Err(std::io::Error::other("storage offline"))
    }

    async fn insert_person(
      &self,
      _person: Person,
    ) -> Result<Person, Self::Error> {
      Err(std::io::Error::other("storage offline"))
    }

    async fn update_person(
      &self,
      _current: Person,
      _desired: Person,
    ) -> Result<(), Self::Error> {
      Err(std::io::Error::other("storage offline"))
    }

    async fn count_people(&self) -> Result<u64, Self::Error> {
      Err(std::io::Error::other("storage offline"))
    }
  }

  #[tokio::test]
  async fn store_failure_returns_bare_500() {
    let resp =
      oneshot_get(api_router(Arc::new(FailStore)), "/names/people").await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(resp).await.is_empty());
  }
}
