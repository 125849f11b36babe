//! Storage layer for the zadachnik application.
//!
//! Persistence here is deliberately simple: the whole task list lives in one
//! human-readable JSON file that is read once at startup and fully rewritten
//! after every mutation. There is no database, no append log and no partial
//! updates, so the file can always be inspected or edited by hand.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zadachnik::storage::tasks::TaskStore;
//!
//! let store = TaskStore::open("./data.json")?;
//! for task in store.tasks() {
//!     println!("{}: {}", task.id, task.title);
//! }
//! # anyhow::Ok(())
//! ```

/// Task collection persistence and the CRUD/search operations over it.
pub mod tasks;
