use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Task;
use crate::store::EntityStore;
use chrono::NaiveDate;

pub fn run<S: EntityStore>(
    store: &mut S,
    title: String,
    description: String,
    due_date: NaiveDate,
) -> Result<CmdResult> {
    let task = store.persist(Task::new(title, description, due_date))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Task created: {}", task.title)));
    if let Some(id) = task.id {
        // The user needs the id for update/delete; show it right away.
        result.add_message(CmdMessage::info(format!("id: {}", id)));
    }
    result.affected_tasks.push(task);
    Ok(result)
}
