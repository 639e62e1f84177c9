use super::{Entity, EntityStore, RawRecords};
use crate::error::{Result, TaskzError};
use crate::ident;
use std::collections::HashMap;

/// In-memory store for tests. Records still go through serde, so it exercises
/// the same raw-record semantics as [`super::fs::FileStore`] minus the
/// filesystem.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    kinds: HashMap<&'static str, RawRecords>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityStore for InMemoryStore {
    fn load_all<E: Entity>(&self) -> Result<RawRecords> {
        Ok(self.kinds.get(E::KIND).cloned().unwrap_or_default())
    }

    fn persist<E: Entity>(&mut self, entity: E) -> Result<E> {
        let (entity, id) = match entity.id() {
            Some(id) => (entity, id),
            None => {
                let id = ident::generate();
                (entity.with_id(id), id)
            }
        };
        let records = self.kinds.entry(E::KIND).or_default();
        records.insert(id.to_string(), serde_json::to_value(&entity)?);
        Ok(entity)
    }

    fn remove<E: Entity>(&mut self, entity: &E) -> Result<()> {
        let id = entity.id().ok_or_else(|| {
            TaskzError::Store("cannot delete a record that was never persisted".to_string())
        })?;
        if let Some(records) = self.kinds.get_mut(E::KIND) {
            records.remove(&id.to_string());
        }
        Ok(())
    }
}
