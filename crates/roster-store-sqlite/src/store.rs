//! [`SqliteStore`]: the SQLite implementation of [`PersonStore`].

use std::path::Path;

use roster_core::{
  person::{NewPerson, Person},
  store::PersonStore,
};

use crate::{schema::SCHEMA, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roster person store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
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
    tracing::debug!("schema initialised");
    Ok(())
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = crate::Error;

  async fn list_persons(&self) -> Result<Vec<Person>> {
    let persons = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, name FROM persons ORDER BY id")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Person {
              id:   row.get(0)?,
              name: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(persons)
  }

  async fn add_person(&self, input: NewPerson) -> Result<Person> {
    let name = input.name.clone();

    // Autocommit: the single INSERT is its own transaction. `id` is left to
    // the identity column.
    let id = self
      .conn
      .call(move |conn| {
        conn.execute("INSERT INTO persons (name) VALUES (?1)", rusqlite::params![name])?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    tracing::debug!(id, "person inserted");
    Ok(Person::from_new(id, input))
  }
}
