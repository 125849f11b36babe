use crate::libs::messages::Message;
use crate::libs::prompt;
use crate::libs::task::TaskUpdate;
use crate::storage::tasks::TaskStore;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;

pub fn cmd(store: &mut TaskStore) -> Result<()> {
    msg_print!(Message::EditTaskHeader, true);
    msg_print!(Message::EditKeepCurrentHint);

    let id = prompt::task_id_input()?;
    let Some(task) = store.get_by_id(id) else {
        msg_error!(Message::TaskNotFoundWithId(id));
        return Ok(());
    };
    let current = task.clone();

    let title = prompt::required_input(Message::PromptTitle, Some(&current.title))?;
    let description = prompt::required_input(Message::PromptDescription, Some(&current.description))?;
    let category = prompt::required_input(Message::PromptCategory, Some(&current.category))?;
    let due_date = prompt::due_date_input(Some(&current.due_date))?;
    let priority = prompt::priority_select()?;
    // Picking "Не указывать" keeps the current status
    let status = prompt::status_select()?.unwrap_or(current.status);

    match TaskUpdate::new(&title, &description, &category, &due_date, priority, status) {
        Ok(update) => match store.update(id, update)? {
            Some(_) => msg_success!(Message::TaskUpdated),
            None => msg_error!(Message::TaskNotFound),
        },
        Err(err) => msg_error!(Message::ValidationFailed(err.to_string())),
    }
    Ok(())
}
