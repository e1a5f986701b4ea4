//! This crate provides an embedded store for daily task records.
//!
//! The [`TaskStore`] owns a collection of [`Task`]s persisted to a local JSON
//! file. It assigns every task its identity at creation time, applies
//! wholesale field updates and deletions keyed on that identity, and publishes
//! a fresh [`subscription::Snapshot`] to every subscriber after each
//! successful mutation, so a view layer can simply re-render whatever it
//! receives. \
//! A store is an explicit value: build one where your process boots and hand
//! it to the layers that need it.
//!
//! ```no_run
//! use day_tasks::{TaskStore, TaskFields};
//!
//! let mut store = TaskStore::open(std::path::Path::new("tasks.json")).unwrap();
//! let task = store.create(TaskFields {
//!     name: "Standup".to_string(),
//!     kind: "meeting".to_string(),
//!     start_time: "09:00".to_string(),
//!     end_time: "09:15".to_string(),
//! }).unwrap();
//! println!("created {}", task.id());
//! ```

mod task;
pub use task::Task;
pub use task::TaskFields;
pub use task::TaskId;
mod store;
pub use store::TaskStore;
mod error;
pub use error::StoreError;

pub mod subscription;
