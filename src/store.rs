//! This module provides the durable task collection

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::subscription::{snapshot_channel, Snapshot, SnapshotReceiver, SnapshotSender};
use crate::task::{Task, TaskFields, TaskId};

/// A collection of [`Task`]s that stores its records in a local file.
///
/// The store assigns every created task its id, applies updates and deletions
/// keyed on that id, and publishes a fresh [`Snapshot`] to every subscriber
/// after each successful mutation.
///
/// There is deliberately no global instance: construct a store where the
/// process boots and pass it down to whatever layer needs it, so that tests
/// can run against isolated stores.
#[derive(Debug)]
pub struct TaskStore {
    backing_file: PathBuf,
    data: StoredData,
    snapshots: SnapshotSender,
}

#[derive(Default, Debug, PartialEq, Serialize, Deserialize)]
struct StoredData {
    tasks: HashMap<TaskId, Task>,
}

impl TaskStore {
    /// Initialize an empty store. Its backing file is created at the first
    /// mutation.
    pub fn new(path: &Path) -> Self {
        let (snapshots, _) = snapshot_channel();
        Self {
            backing_file: PathBuf::from(path),
            data: StoredData::default(),
            snapshots,
        }
    }

    /// Initialize a store from the content of a valid backing file.
    ///
    /// Returns [`StoreError::Init`] otherwise. This is a fatal condition:
    /// there is no fallback to an empty store, since silently shadowing an
    /// unreadable file would lose the user's records on the next write.
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let file = std::fs::File::open(path).map_err(|err| StoreError::Init {
            path: PathBuf::from(path),
            source: err.into(),
        })?;
        let data: StoredData = serde_json::from_reader(file).map_err(|err| StoreError::Init {
            path: PathBuf::from(path),
            source: err.into(),
        })?;

        let (snapshots, _) = snapshot_channel();
        let store = Self {
            backing_file: PathBuf::from(path),
            data,
            snapshots,
        };
        // Seed the channel, so that subscribers see the loaded records even
        // before the first mutation
        store.publish();
        Ok(store)
    }

    /// Initialize a store from its backing file, or a fresh empty store in
    /// case the file does not exist yet.
    ///
    /// An existing-but-unreadable file is still an error, as in
    /// [`from_file`](Self::from_file).
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            log::info!("No backing file at {:?}, starting with an empty store", path);
            Ok(Self::new(path))
        }
    }

    /// The file this store persists to
    pub fn backing_file(&self) -> &Path {
        &self.backing_file
    }

    /// Add a brand new task to the collection.
    ///
    /// The store picks a fresh random id; whatever duplicates the fields may
    /// have among existing records are accepted. On success the stored task
    /// (with its assigned id) is returned and a snapshot is published.
    pub fn create(&mut self, fields: TaskFields) -> Result<Task, StoreError> {
        let task = Task::new(TaskId::random(), fields);
        let id = task.id().clone();

        self.data.tasks.insert(id.clone(), task.clone());
        if let Err(err) = self.save_to_file() {
            self.data.tasks.remove(&id);
            return Err(err);
        }

        log::debug!("Created task {}", id);
        self.publish();
        Ok(task)
    }

    /// Overwrite the four mutable fields of the task with this id, wholesale.
    /// The id itself never changes.
    ///
    /// Returns [`StoreError::NotFound`] (and mutates nothing) in case no task
    /// has this id.
    pub fn update(&mut self, id: &TaskId, fields: TaskFields) -> Result<(), StoreError> {
        let previous = match self.data.tasks.get_mut(id) {
            None => return Err(StoreError::NotFound(id.clone())),
            Some(task) => task.replace_fields(fields),
        };

        if let Err(err) = self.save_to_file() {
            if let Some(task) = self.data.tasks.get_mut(id) {
                task.replace_fields(previous);
            }
            return Err(err);
        }

        log::debug!("Updated task {}", id);
        self.publish();
        Ok(())
    }

    /// Remove the task with this id from the collection.
    ///
    /// Returns [`StoreError::NotFound`] (and mutates nothing) in case no task
    /// has this id.
    pub fn delete(&mut self, id: &TaskId) -> Result<(), StoreError> {
        let removed = match self.data.tasks.remove(id) {
            None => return Err(StoreError::NotFound(id.clone())),
            Some(task) => task,
        };

        if let Err(err) = self.save_to_file() {
            self.data.tasks.insert(id.clone(), removed);
            return Err(err);
        }

        log::debug!("Deleted task {}", id);
        self.publish();
        Ok(())
    }

    /// Returns the task with this id, if any
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.data.tasks.get(id)
    }

    /// Returns the current snapshot of all tasks
    pub fn tasks(&self) -> Snapshot {
        self.snapshot()
    }

    /// Subscribe to the contents of this store.
    ///
    /// The receiver is handed the updated [`Snapshot`] after every successful
    /// create/update/delete. Failed operations (including not-found ones)
    /// publish nothing. Drop the receiver to unsubscribe.
    pub fn subscribe(&self) -> SnapshotReceiver {
        self.snapshots.subscribe()
    }

    fn snapshot(&self) -> Snapshot {
        let mut tasks: Vec<Task> = self.data.tasks.values().cloned().collect();
        tasks.sort_by(|left, right| left.id().cmp(right.id()));
        tasks
    }

    fn publish(&self) {
        // send_replace stores the value even when no receiver currently
        // exists, so late subscribers still start from the current contents
        self.snapshots.send_replace(self.snapshot());
    }

    /// Store the current collection to its backing file
    fn save_to_file(&self) -> Result<(), StoreError> {
        let path = &self.backing_file;
        let file = match std::fs::File::create(path) {
            Err(err) => {
                log::warn!("Unable to save file {:?}: {}", path, err);
                return Err(StoreError::Write {
                    path: path.clone(),
                    source: err.into(),
                });
            }
            Ok(f) => f,
        };

        if let Err(err) = serde_json::to_writer(file, &self.data) {
            log::warn!("Unable to serialize: {}", err);
            return Err(StoreError::Write {
                path: path.clone(),
                source: err.into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> TaskFields {
        TaskFields {
            name: "Standup".to_string(),
            kind: "meeting".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:15".to_string(),
        }
    }

    #[test]
    fn serde_backing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");

        let mut store = TaskStore::new(&path);
        store.create(sample_fields()).unwrap();

        let retrieved_store = TaskStore::from_file(&path).unwrap();
        assert_eq!(store.data, retrieved_store.data);
    }

    #[test]
    fn from_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, b"{ this is not task data").unwrap();

        match TaskStore::from_file(&path) {
            Err(StoreError::Init { .. }) => {}
            other => panic!("expected an init failure, got {:?}", other),
        }
    }
}
