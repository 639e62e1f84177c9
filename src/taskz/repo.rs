use crate::error::Result;
use crate::model::Task;
use crate::store::EntityStore;
use uuid::Uuid;

/// Typed read facade over the store for the Task kind.
///
/// Every call decodes fresh values from the raw records; nothing is cached
/// between calls, so callers always see what the file holds.
pub struct TaskRepository<'a, S: EntityStore> {
    store: &'a S,
}

impl<'a, S: EntityStore> TaskRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Absence is `None`, not an error; callers branch on presence.
    pub fn find_one(&self, id: Uuid) -> Result<Option<Task>> {
        let records = self.store.load_all::<Task>()?;
        match records.get(&id.to_string()) {
            Some(raw) => Ok(Some(serde_json::from_value(raw.clone())?)),
            None => Ok(None),
        }
    }

    /// All tasks, in the order they were first persisted.
    pub fn find_all(&self) -> Result<Vec<Task>> {
        let records = self.store.load_all::<Task>()?;
        records
            .into_iter()
            .map(|(_, raw)| serde_json::from_value(raw).map_err(Into::into))
            .collect()
    }
}
