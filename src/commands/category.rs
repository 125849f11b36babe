use crate::libs::messages::Message;
use crate::libs::prompt;
use crate::libs::view::View;
use crate::msg_info;
use crate::storage::tasks::TaskStore;
use anyhow::Result;

pub fn cmd(store: &TaskStore) -> Result<()> {
    let category = prompt::optional_input(Message::PromptCategoryBrowse)?.unwrap_or_default();

    let tasks = store.get_by_category(&category);
    if tasks.is_empty() {
        msg_info!(Message::NoTasksInCategory(category));
        return Ok(());
    }

    View::tasks(&tasks)?;
    Ok(())
}
