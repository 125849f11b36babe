use crate::libs::messages::Message;
use crate::libs::prompt;
use crate::storage::tasks::TaskStore;
use crate::{msg_error, msg_success};
use anyhow::Result;

pub fn cmd(store: &mut TaskStore) -> Result<()> {
    let id = prompt::task_id_input()?;

    match store.mark_completed(id)? {
        Some(_) => msg_success!(Message::TaskCompleted),
        None => msg_error!(Message::TaskNotFoundWithId(id)),
    }
    Ok(())
}
