//! # Storage Layer
//!
//! The [`EntityStore`] trait is the persistence seam: [`fs::FileStore`] is the
//! production backend (one JSON object per entity kind, keyed by id string),
//! [`memory::InMemoryStore`] backs the tests with the same raw-record
//! semantics and no filesystem.
//!
//! The store owns identity: records arrive without an id the first time and
//! leave `persist` carrying a freshly generated one. Reads hand out *raw*
//! records; typed decoding is the repository's job.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Raw store contents for one entity kind: id string -> undecoded record.
/// `serde_json::Map` preserves insertion order (the `preserve_order` feature),
/// which is the order records were first persisted in.
pub type RawRecords = serde_json::Map<String, Value>;

/// A record kind the store knows how to persist.
///
/// `KIND` doubles as the file stem of the backing document (`task` ->
/// `task.json`). Identity is assigned through [`Entity::with_id`], a
/// value-returning step, never by poking fields from outside.
pub trait Entity: Serialize + DeserializeOwned {
    const KIND: &'static str;

    fn id(&self) -> Option<Uuid>;

    /// Consume the entity and return it carrying `id`. Implementations keep
    /// an already-assigned id; ids are immutable once set.
    fn with_id(self, id: Uuid) -> Self;
}

/// What to do when a store file exists but does not parse as a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedStorePolicy {
    /// Treat the store as empty. The historical behavior; a later successful
    /// write will overwrite whatever the file held.
    #[default]
    TreatAsEmpty,
    /// Surface an error instead of silently dropping data.
    Fail,
}

pub trait EntityStore {
    /// Full raw mapping for one kind. A missing file is an empty store,
    /// never an error.
    fn load_all<E: Entity>(&self) -> Result<RawRecords>;

    /// Upsert: assigns a fresh id when the entity has none, then replaces the
    /// whole record. Returns the entity with its id set.
    fn persist<E: Entity>(&mut self, entity: E) -> Result<E>;

    /// Remove the entity's record. An absent record is a no-op.
    fn remove<E: Entity>(&mut self, entity: &E) -> Result<()>;
}
