//! Core library modules for the zadachnik application.
//!
//! Serves as the main entry point for all zadachnik library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage paths, messaging
//! - **Task Model**: Record schema, payload validation, label enums
//! - **User Interface**: Interactive prompts and console table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zadachnik::libs::task::{NewTask, Priority};
//! use zadachnik::storage::tasks::TaskStore;
//!
//! let mut store = TaskStore::new()?;
//! let new_task = NewTask::new("Отчет", "Квартальный отчет", "Работа", "2026-09-01", Priority::High)?;
//! store.add(new_task)?;
//! # anyhow::Ok(())
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod prompt;
pub mod task;
pub mod view;
