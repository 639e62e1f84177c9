//! # API Facade
//!
//! The single entry point for all taskz operations. The facade validates raw
//! string inputs (the form a CLI hands over), normalizes them into typed
//! values, and dispatches to the command layer. Business logic lives in
//! `commands/*.rs`; nothing here writes to stdout or assumes a terminal.

use crate::commands::{self, CmdResult, TaskUpdate};
use crate::error::Result;
use crate::store::EntityStore;
use crate::validate;

/// Raw, not-yet-validated field changes as they arrive from the CLI.
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub completed: bool,
}

/// Generic over [`EntityStore`] so tests run against `InMemoryStore` while
/// production wires up `FileStore`.
pub struct TaskApi<S: EntityStore> {
    store: S,
}

impl<S: EntityStore> TaskApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_task(
        &mut self,
        title: &str,
        description: &str,
        due_date: &str,
    ) -> Result<CmdResult> {
        validate::validate_title(title)?;
        validate::validate_description(description)?;
        let due = validate::validate_due_date(due_date)?;
        commands::create::run(
            &mut self.store,
            title.to_string(),
            description.to_string(),
            due,
        )
    }

    pub fn list_tasks(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn update_task(&mut self, id: &str, changes: TaskChanges) -> Result<CmdResult> {
        let id = validate::validate_id(id)?;

        let mut update = TaskUpdate {
            completed: changes.completed,
            ..Default::default()
        };
        if let Some(title) = changes.title {
            validate::validate_title(&title)?;
            update.title = Some(title);
        }
        if let Some(description) = changes.description {
            validate::validate_description(&description)?;
            update.description = Some(description);
        }
        if let Some(due_date) = changes.due_date {
            update.due_date = Some(validate::validate_due_date(&due_date)?);
        }

        commands::update::run(&mut self.store, id, &update)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<CmdResult> {
        let id = validate::validate_id(id)?;
        commands::delete::run(&mut self.store, id)
    }
}
