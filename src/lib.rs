//! # Zadachnik - personal task tracker
//!
//! A command-line utility for keeping a personal task list in a local
//! JSON file: add, browse, search, edit, complete and delete tasks.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, complete and delete tasks
//! - **Categories**: Group tasks and browse them by category
//! - **Search**: Combine keyword, category and status filters
//! - **Priorities & Statuses**: Closed label sets with sane defaults
//! - **Plain Storage**: One human-readable JSON file, rewritten atomically
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zadachnik::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod storage;
