use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskzError};
use crate::repo::TaskRepository;
use crate::store::EntityStore;
use uuid::Uuid;

pub fn run<S: EntityStore>(store: &mut S, id: Uuid) -> Result<CmdResult> {
    let task = TaskRepository::new(store)
        .find_one(id)?
        .ok_or(TaskzError::TaskNotFound(id))?;
    store.remove(&task)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Task deleted: {}", task.title)));
    result.affected_tasks.push(task);
    Ok(result)
}
