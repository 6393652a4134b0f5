//! Person: the single record type the service stores.

use serde::{Deserialize, Serialize};

/// A stored person. `id` is always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:   i64,
  pub name: String,
}

/// The payload for creating a person.
///
/// There is no identifier here: the store assigns one on insert. A client
/// may still send an integer `id` alongside `name`; it is type-checked and
/// then dropped during deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NewPersonBody")]
pub struct NewPerson {
  pub name: String,
}

/// Wire shape of a create request, including the ignored client `id`.
#[derive(Deserialize)]
struct NewPersonBody {
  #[serde(default, rename = "id")]
  _id:  Option<i64>,
  name: String,
}

impl From<NewPersonBody> for NewPerson {
  fn from(b: NewPersonBody) -> Self { NewPerson { name: b.name } }
}

impl NewPerson {
  pub fn new(name: impl Into<String>) -> Self { Self { name: name.into() } }
}

impl Person {
  /// Attach a store-assigned identifier to an insert payload.
  pub fn from_new(id: i64, new: NewPerson) -> Self { Self { id, name: new.name } }
}
