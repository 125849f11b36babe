use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_info;
use crate::storage::tasks::TaskStore;
use anyhow::Result;

pub fn cmd(store: &TaskStore) -> Result<()> {
    let tasks = store.tasks();
    if tasks.is_empty() {
        msg_info!(Message::NoTasks);
        return Ok(());
    }

    View::tasks(&tasks.iter().collect::<Vec<_>>())?;
    Ok(())
}
