//! Task record types and field validation.
//!
//! Everything persisted by the application is a [`Task`]. New records enter
//! the system through the [`NewTask`] and [`TaskUpdate`] payloads, whose
//! constructors trim string fields and reject invalid values, so a `Task`
//! held in memory always satisfies the schema invariants.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;
use thiserror::Error;

/// Due dates are a literal `YYYY-MM-DD` shape check: month 01-12, day 01-31.
/// Calendar validity is deliberately not enforced, `2024-02-31` passes.
static DUE_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("Invalid due date regex pattern"));

/// Checks a candidate due date against the `YYYY-MM-DD` pattern.
pub fn is_valid_due_date(value: &str) -> bool {
    DUE_DATE_PATTERN.is_match(value)
}

/// Violations reported by the payload constructors and by file loading.
///
/// The first violation encountered wins; callers get a single error value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("due date '{0}' does not match the YYYY-MM-DD format")]
    BadDueDate(String),
    #[error("unknown status label '{0}'")]
    UnknownStatus(String),
    #[error("task id must be greater than zero")]
    ZeroId,
    #[error("duplicate task id {0}")]
    DuplicateId(u32),
}

/// Task priority, persisted as its Russian label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    #[serde(rename = "Низкий")]
    Low,
    #[serde(rename = "Средний")]
    Medium,
    #[serde(rename = "Высокий")]
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Низкий",
            Priority::Medium => "Средний",
            Priority::High => "Высокий",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Completion status, persisted as its Russian label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Выполнена")]
    Done,
    #[default]
    #[serde(rename = "Не выполнена")]
    NotDone,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Done, Status::NotDone];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Done => "Выполнена",
            Status::NotDone => "Не выполнена",
        }
    }

    /// Case-insensitive label lookup, used by the status search filter.
    pub fn from_label(label: &str) -> Result<Status, ValidationError> {
        match label.trim().to_lowercase().as_str() {
            "выполнена" => Ok(Status::Done),
            "не выполнена" => Ok(Status::NotDone),
            _ => Err(ValidationError::UnknownStatus(label.to_string())),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A stored task. Field order matches the on-disk JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub due_date: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
}

impl Task {
    pub(crate) fn from_new(id: u32, new_task: NewTask) -> Self {
        Task {
            id,
            title: new_task.title,
            description: new_task.description,
            category: new_task.category,
            due_date: new_task.due_date,
            priority: new_task.priority,
            // Fresh tasks always start out incomplete
            status: Status::NotDone,
        }
    }

    pub(crate) fn from_update(id: u32, update: TaskUpdate) -> Self {
        Task {
            id,
            title: update.title,
            description: update.description,
            category: update.category,
            due_date: update.due_date,
            priority: update.priority,
            status: update.status,
        }
    }

    /// Re-validates a record read back from disk: trims string fields the
    /// same way the payload constructors do and rejects anything that could
    /// not have been produced by them.
    pub(crate) fn normalize(&mut self) -> Result<(), ValidationError> {
        if self.id == 0 {
            return Err(ValidationError::ZeroId);
        }
        self.title = required_field("title", &self.title)?;
        self.description = required_field("description", &self.description)?;
        self.category = required_field("category", &self.category)?;
        self.due_date = valid_due_date(&self.due_date)?;
        Ok(())
    }
}

/// Validated payload for creating a task: everything but the id and status,
/// which the store assigns itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) category: String,
    pub(crate) due_date: String,
    pub(crate) priority: Priority,
}

impl NewTask {
    pub fn new(title: &str, description: &str, category: &str, due_date: &str, priority: Priority) -> Result<Self, ValidationError> {
        Ok(NewTask {
            title: required_field("title", title)?,
            description: required_field("description", description)?,
            category: required_field("category", category)?,
            due_date: valid_due_date(due_date)?,
            priority,
        })
    }
}

/// Validated payload for replacing a task: a full set of field values,
/// including an explicit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) category: String,
    pub(crate) due_date: String,
    pub(crate) priority: Priority,
    pub(crate) status: Status,
}

impl TaskUpdate {
    pub fn new(title: &str, description: &str, category: &str, due_date: &str, priority: Priority, status: Status) -> Result<Self, ValidationError> {
        Ok(TaskUpdate {
            title: required_field("title", title)?,
            description: required_field("description", description)?,
            category: required_field("category", category)?,
            due_date: valid_due_date(due_date)?,
            priority,
            status,
        })
    }
}

/// Selects which tasks a delete operation touches.
///
/// `None` is a deliberate variant: a delete with nothing selected is an
/// accepted no-op rather than an error, the file is rewritten unchanged.
#[derive(Debug, Clone)]
pub enum TaskSelector {
    ById(u32),
    ByCategory(String),
    None,
}

/// Search filters, combined with AND. Unset fields do not constrain the
/// result; status is matched by its label, case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

fn required_field(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value.to_string())
}

fn valid_due_date(value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if !is_valid_due_date(value) {
        return Err(ValidationError::BadDueDate(value.to_string()));
    }
    Ok(value.to_string())
}
