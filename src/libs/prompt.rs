//! Interactive prompt helpers shared by the menu commands.
//!
//! Thin wrappers over `dialoguer` that encode the input rules of the task
//! fields: required fields re-prompt until non-empty, editable fields carry
//! the current value as a default so Enter keeps it, and the due date loops
//! until it matches the expected format.

use crate::libs::messages::Message;
use crate::libs::task::{is_valid_due_date, Priority, Status};
use crate::msg_error;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Asks for a non-empty text value. With `current` set, an empty answer
/// keeps the current value.
pub fn required_input(prompt: Message, current: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::with_theme(&theme).with_prompt(prompt.to_string());
    if let Some(current) = current {
        input = input.default(current.to_string());
    }
    let value: String = input
        .validate_with(|text: &String| -> Result<(), String> {
            if text.trim().is_empty() {
                Err(Message::FieldRequired.to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Asks for a text value that may be left empty; an empty answer means
/// "not specified".
pub fn optional_input(prompt: Message) -> Result<Option<String>> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?;
    let value = value.trim();
    Ok(if value.is_empty() { None } else { Some(value.to_string()) })
}

/// Asks for a due date until it matches `YYYY-MM-DD`. With `current` set,
/// an empty answer keeps the current date.
pub fn due_date_input(current: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    loop {
        let mut input = Input::with_theme(&theme).with_prompt(Message::PromptDueDate.to_string());
        if let Some(current) = current {
            input = input.default(current.to_string());
        }
        let value: String = input.interact_text()?;
        let value = value.trim();
        if is_valid_due_date(value) {
            return Ok(value.to_string());
        }
        msg_error!(Message::InvalidDate);
    }
}

/// Asks for a task id; non-numeric answers are rejected by the typed input
/// and asked again.
pub fn task_id_input() -> Result<u32> {
    let id: u32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskId.to_string())
        .interact_text()?;
    Ok(id)
}

/// Selection over the three priority labels.
pub fn priority_select() -> Result<Priority> {
    let labels: Vec<&str> = Priority::ALL.iter().map(|priority| priority.label()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPriority.to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Priority::ALL[selection])
}

/// Selection over the status labels with a leading "not specified" item;
/// picking it yields `None`.
pub fn status_select() -> Result<Option<Status>> {
    let mut items = vec![Message::StatusNotSpecified.to_string()];
    items.extend(Status::ALL.iter().map(|status| status.label().to_string()));
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptStatusOptional.to_string())
        .items(&items)
        .default(0)
        .interact()?;
    Ok(match selection {
        0 => None,
        index => Some(Status::ALL[index - 1]),
    })
}
