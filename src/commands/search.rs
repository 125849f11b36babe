use crate::libs::messages::Message;
use crate::libs::prompt;
use crate::libs::task::SearchQuery;
use crate::libs::view::View;
use crate::msg_info;
use crate::storage::tasks::TaskStore;
use anyhow::Result;

pub fn cmd(store: &TaskStore) -> Result<()> {
    // Empty answers leave the corresponding filter off
    let query = SearchQuery {
        keyword: prompt::optional_input(Message::PromptKeyword)?,
        category: prompt::optional_input(Message::PromptCategoryOptional)?,
        status: prompt::status_select()?.map(|status| status.label().to_string()),
    };

    let tasks = store.search(&query);
    if tasks.is_empty() {
        msg_info!(Message::SearchNoResults);
        return Ok(());
    }

    View::tasks(&tasks)?;
    Ok(())
}
