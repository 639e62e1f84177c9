use crate::commands::{CmdMessage, CmdResult, TaskUpdate};
use crate::error::{Result, TaskzError};
use crate::model::DueDate;
use crate::repo::TaskRepository;
use crate::store::EntityStore;
use uuid::Uuid;

pub fn run<S: EntityStore>(store: &mut S, id: Uuid, update: &TaskUpdate) -> Result<CmdResult> {
    let mut task = TaskRepository::new(store)
        .find_one(id)?
        .ok_or(TaskzError::TaskNotFound(id))?;

    let mut result = CmdResult::default();

    if let Some(title) = &update.title {
        task.title = title.clone();
    }
    if let Some(description) = &update.description {
        task.description = description.clone();
    }
    if let Some(due_date) = update.due_date {
        task.due_date = DueDate::new(due_date);
    }
    if update.completed {
        if task.is_completed() {
            result.add_message(CmdMessage::warning("Task is already completed."));
        }
        task.mark_completed();
    }

    let task = store.persist(task)?;
    result.add_message(CmdMessage::success(format!("Task updated: {}", task.title)));
    result.affected_tasks.push(task);
    Ok(result)
}
