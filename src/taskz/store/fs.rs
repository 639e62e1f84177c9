use super::{Entity, EntityStore, MalformedStorePolicy, RawRecords};
use crate::error::{Result, TaskzError};
use crate::ident;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed store: one JSON object per entity kind at `<root>/<kind>.json`.
///
/// Every write rewrites the whole file. There is no locking; two processes
/// writing the same store race last-writer-wins.
pub struct FileStore {
    root: PathBuf,
    malformed_policy: MalformedStorePolicy,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            malformed_policy: MalformedStorePolicy::default(),
        }
    }

    pub fn with_malformed_policy(mut self, policy: MalformedStorePolicy) -> Self {
        self.malformed_policy = policy;
        self
    }

    fn kind_path(&self, kind: &str) -> PathBuf {
        self.root.join(format!("{}.json", kind.to_lowercase()))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TaskzError::Io)?;
        }
        Ok(())
    }

    fn read_records(&self, path: &Path) -> Result<RawRecords> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(RawRecords::new()),
            Err(e) => return Err(TaskzError::Io(e)),
        };
        if content.trim().is_empty() {
            return Ok(RawRecords::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(records)) => Ok(records),
            Ok(_) => match self.malformed_policy {
                MalformedStorePolicy::TreatAsEmpty => Ok(RawRecords::new()),
                MalformedStorePolicy::Fail => Err(TaskzError::Store(format!(
                    "store file is not a JSON object: {}",
                    path.display()
                ))),
            },
            Err(e) => match self.malformed_policy {
                MalformedStorePolicy::TreatAsEmpty => Ok(RawRecords::new()),
                MalformedStorePolicy::Fail => Err(TaskzError::Serialization(e)),
            },
        }
    }

    fn write_records(&self, kind: &str, records: &RawRecords) -> Result<()> {
        self.ensure_root()?;
        let content = serde_json::to_string_pretty(records).map_err(TaskzError::Serialization)?;
        fs::write(self.kind_path(kind), content).map_err(TaskzError::Io)?;
        Ok(())
    }
}

impl EntityStore for FileStore {
    fn load_all<E: Entity>(&self) -> Result<RawRecords> {
        self.read_records(&self.kind_path(E::KIND))
    }

    fn persist<E: Entity>(&mut self, entity: E) -> Result<E> {
        let mut records = self.load_all::<E>()?;
        let (entity, id) = match entity.id() {
            Some(id) => (entity, id),
            None => {
                let id = ident::generate();
                (entity.with_id(id), id)
            }
        };
        records.insert(id.to_string(), serde_json::to_value(&entity)?);
        self.write_records(E::KIND, &records)?;
        Ok(entity)
    }

    fn remove<E: Entity>(&mut self, entity: &E) -> Result<()> {
        let id = entity.id().ok_or_else(|| {
            TaskzError::Store("cannot delete a record that was never persisted".to_string())
        })?;
        let mut records = self.load_all::<E>()?;
        if records.remove(&id.to_string()).is_none() {
            // Nothing to do; deleting an absent record is a success.
            return Ok(());
        }
        self.write_records(E::KIND, &records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use chrono::NaiveDate;

    fn task(title: &str) -> Task {
        Task::new(
            title.to_string(),
            "desc".to_string(),
            NaiveDate::from_ymd_opt(2030, 5, 1).unwrap(),
        )
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load_all::<Task>().unwrap().is_empty());
    }

    #[test]
    fn empty_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("task.json"), "").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load_all::<Task>().unwrap().is_empty());
    }

    #[test]
    fn persist_assigns_an_id_and_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let saved = store.persist(task("Buy milk")).unwrap();
        let id = saved.id.expect("id assigned on first persist");

        let records = store.load_all::<Task>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[&id.to_string()]["title"], "Buy milk");
    }

    #[test]
    fn persist_with_an_id_replaces_the_record_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let mut saved = store.persist(task("Before")).unwrap();
        saved.title = "After".to_string();
        let updated = store.persist(saved.clone()).unwrap();
        assert_eq!(updated.id, saved.id);

        let records = store.load_all::<Task>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[&updated.id.unwrap().to_string()]["title"], "After");
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let saved = store.persist(task("Gone")).unwrap();
        store.remove(&saved).unwrap();
        store.remove(&saved).unwrap();
        assert!(store.load_all::<Task>().unwrap().is_empty());
    }

    #[test]
    fn remove_requires_an_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.remove(&task("Unsaved")),
            Err(TaskzError::Store(_))
        ));
    }

    #[test]
    fn malformed_content_reads_as_empty_by_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("task.json"), "{ not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load_all::<Task>().unwrap().is_empty());
    }

    #[test]
    fn non_object_content_reads_as_empty_by_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("task.json"), "[1, 2, 3]").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load_all::<Task>().unwrap().is_empty());
    }

    #[test]
    fn malformed_content_errors_under_the_fail_policy() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("task.json"), "{ not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf())
            .with_malformed_policy(MalformedStorePolicy::Fail);
        assert!(matches!(
            store.load_all::<Task>(),
            Err(TaskzError::Serialization(_))
        ));

        fs::write(dir.path().join("task.json"), "[1, 2, 3]").unwrap();
        assert!(matches!(
            store.load_all::<Task>(),
            Err(TaskzError::Store(_))
        ));
    }
}
