//! Handlers for `/persons` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/persons` | Every stored person, no paging |
//! | `POST` | `/persons` | Body: `{"name":"..."}`; returns 200 + stored person |

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use roster_core::{
  person::{NewPerson, Person},
  store::PersonStore,
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /persons`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore,
{
  let persons = store.list_persons().await.map_err(ApiError::store)?;
  Ok(Json(persons))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /persons`: body `{"name":"Alice"}`.
///
/// The body is taken as a `Result` so a malformed payload becomes an
/// [`ApiError::InvalidBody`] before the store is touched. An `id` in the body
/// is ignored; the store assigns one.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewPerson>, JsonRejection>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
{
  let Json(input) = body?;
  let person = store.add_person(input).await.map_err(ApiError::store)?;
  tracing::debug!(id = person.id, "person created");
  Ok(Json(person))
}
