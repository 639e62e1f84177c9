use crate::commands::CmdResult;
use crate::error::Result;
use crate::repo::TaskRepository;
use crate::store::EntityStore;

pub fn run<S: EntityStore>(store: &S) -> Result<CmdResult> {
    let tasks = TaskRepository::new(store).find_all()?;
    Ok(CmdResult::default().with_listed_tasks(tasks))
}
