//! JSON HTTP API for Roster.
//!
//! Exposes an axum [`Router`] backed by any [`roster_core::store::PersonStore`].
//! The store handle is injected as router state; handlers never reach for a
//! global.

pub mod config;
pub mod error;
pub mod home;
pub mod persons;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use roster_core::store::PersonStore;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;

/// Build the application router for `store`.
///
/// Besides the canonical routes, the conventional `/Home/<Action>` paths are
/// wired to the same handlers so older clients keep working.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: PersonStore + 'static,
{
  Router::new()
    .route("/", get(home::index))
    .route("/health", get(home::health))
    .route("/persons", get(persons::list::<S>).post(persons::create::<S>))
    // Conventional controller/action aliases
    .route("/Home/Index", get(home::index))
    .route("/Home/GetPersons", get(persons::list::<S>))
    .route("/Home/PostPerson", post(persons::create::<S>))
    .with_state(store)
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
