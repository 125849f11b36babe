use crate::libs::messages::Message;
use crate::libs::prompt;
use crate::libs::task::TaskSelector;
use crate::storage::tasks::TaskStore;
use crate::{msg_success, msg_warning};
use anyhow::Result;

pub fn cmd(store: &mut TaskStore) -> Result<()> {
    let id = prompt::task_id_input()?;

    let removed = store.delete(&TaskSelector::ById(id))?;
    if removed == 0 {
        msg_warning!(Message::TaskNotFoundWithId(id));
        return Ok(());
    }

    msg_success!(Message::TaskDeleted);
    Ok(())
}
