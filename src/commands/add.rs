use crate::libs::messages::Message;
use crate::libs::prompt;
use crate::libs::task::NewTask;
use crate::storage::tasks::TaskStore;
use crate::{msg_error, msg_success};
use anyhow::Result;

pub fn cmd(store: &mut TaskStore) -> Result<()> {
    let title = prompt::required_input(Message::PromptTitle, None)?;
    let description = prompt::required_input(Message::PromptDescription, None)?;
    let category = prompt::required_input(Message::PromptCategory, None)?;
    let due_date = prompt::due_date_input(None)?;
    let priority = prompt::priority_select()?;

    match NewTask::new(&title, &description, &category, &due_date, priority) {
        Ok(new_task) => {
            store.add(new_task)?;
            msg_success!(Message::TaskAdded);
        }
        Err(err) => msg_error!(Message::ValidationFailed(err.to_string())),
    }
    Ok(())
}
