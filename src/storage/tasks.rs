//! JSON-file task store.
//!
//! [`TaskStore`] owns the in-memory task list and its backing file. Reads are
//! served from memory; every mutating operation rewrites the whole file
//! before returning, so memory and disk never diverge. Loading is forgiving:
//! a missing or unreadable file becomes an empty list with a console notice,
//! never a startup failure.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, SearchQuery, Status, Task, TaskSelector, TaskUpdate, ValidationError};
use crate::{msg_debug, msg_info, msg_warning};
use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DATA_FILE_NAME: &str = "data.json";

pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Opens the store at the default platform location.
    pub fn new() -> Result<TaskStore> {
        let path = DataStorage::new().get_path(DATA_FILE_NAME)?;
        Self::open(path)
    }

    /// Opens the store backed by the given file.
    ///
    /// A missing file and rejected content both fall back to an empty
    /// collection; only unexpected I/O failures are returned as errors.
    pub fn open(path: impl Into<PathBuf>) -> Result<TaskStore> {
        let path = path.into();
        let tasks = Self::load(&path)?;
        Ok(TaskStore { path, tasks })
    }

    fn load(path: &Path) -> Result<Vec<Task>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                msg_info!(Message::DataFileMissing(path.display().to_string()));
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        match Self::parse(&content) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                msg_debug!(format!("Task file rejected: {}", err));
                msg_warning!(Message::DataFileInvalid(path.display().to_string()));
                Ok(Vec::new())
            }
        }
    }

    /// Parses and re-validates the file content. Any record violating the
    /// schema makes the whole file count as unreadable.
    fn parse(content: &str) -> Result<Vec<Task>> {
        let mut tasks: Vec<Task> = serde_json::from_str(content)?;
        let mut seen = HashSet::new();
        for task in &mut tasks {
            task.normalize()?;
            if !seen.insert(task.id) {
                return Err(ValidationError::DuplicateId(task.id).into());
            }
        }
        Ok(tasks)
    }

    /// Rewrites the backing file with the current collection.
    ///
    /// The document goes to a sibling `.tmp` file first and is renamed over
    /// the target, so an interrupted write cannot leave a truncated list.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.tasks)?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Read-only view of the whole collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task under the next free id (highest live id plus one).
    /// Fresh tasks always start incomplete regardless of the payload.
    pub fn add(&mut self, new_task: NewTask) -> Result<Task> {
        let id = self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
        let task = Task::from_new(id, new_task);
        self.tasks.push(task.clone());
        self.save()?;
        Ok(task)
    }

    pub fn get_by_id(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks whose category matches, ignoring case.
    pub fn get_by_category(&self, category: &str) -> Vec<&Task> {
        let category = category.to_lowercase();
        self.tasks.iter().filter(|task| task.category.to_lowercase() == category).collect()
    }

    /// Applies the provided filters in sequence; an empty query returns the
    /// whole collection.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Task> {
        let mut result: Vec<&Task> = self.tasks.iter().collect();
        if let Some(keyword) = &query.keyword {
            let keyword = keyword.to_lowercase();
            result.retain(|task| task.title.to_lowercase().contains(&keyword) || task.description.to_lowercase().contains(&keyword));
        }
        if let Some(category) = &query.category {
            let category = category.to_lowercase();
            result.retain(|task| task.category.to_lowercase() == category);
        }
        if let Some(label) = &query.status {
            // A label outside the closed set can match no task
            match Status::from_label(label) {
                Ok(status) => result.retain(|task| task.status == status),
                Err(_) => result.clear(),
            }
        }
        result
    }

    /// Replaces every field of the task with the given id, keeping the id
    /// itself. Returns `Ok(None)` without touching the file when the id is
    /// unknown.
    pub fn update(&mut self, id: u32, update: TaskUpdate) -> Result<Option<Task>> {
        let Some(position) = self.tasks.iter().position(|task| task.id == id) else {
            return Ok(None);
        };
        let task = Task::from_update(id, update);
        self.tasks[position] = task.clone();
        self.save()?;
        Ok(Some(task))
    }

    /// Marks the task done and returns it. `Ok(None)` means the id is
    /// unknown, which keeps "not found" separate from a failed write.
    pub fn mark_completed(&mut self, id: u32) -> Result<Option<Task>> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        task.status = Status::Done;
        let task = task.clone();
        self.save()?;
        Ok(Some(task))
    }

    /// Removes the selected tasks and reports how many went away.
    ///
    /// Category deletion matches exactly, unlike the case-insensitive reads.
    /// [`TaskSelector::None`] removes nothing but still rewrites the file,
    /// like any other delete.
    pub fn delete(&mut self, selector: &TaskSelector) -> Result<usize> {
        let before = self.tasks.len();
        match selector {
            TaskSelector::ById(id) => self.tasks.retain(|task| task.id != *id),
            TaskSelector::ByCategory(category) => self.tasks.retain(|task| &task.category != category),
            TaskSelector::None => {}
        }
        self.save()?;
        Ok(before - self.tasks.len())
    }
}
