//! Utilities to follow the contents of a store as they change

use crate::task::Task;

/// The full current contents of a store, as returned by
/// [`tasks`](crate::TaskStore::tasks) and delivered to subscribers after every
/// successful mutation.
///
/// Snapshots are sorted by task id so that two snapshots of the same contents
/// compare equal. This is a presentation detail, not a scheduling order.
pub type Snapshot = Vec<Task>;

/// See [`snapshot_channel`]
pub type SnapshotSender = tokio::sync::watch::Sender<Snapshot>;
/// See [`snapshot_channel`]
pub type SnapshotReceiver = tokio::sync::watch::Receiver<Snapshot>;

/// Create a snapshot channel. The store keeps the sender; every call to
/// [`subscribe`](crate::TaskStore::subscribe) hands out a new receiver.
/// Unsubscribing is simply dropping the receiver.
pub(crate) fn snapshot_channel() -> (SnapshotSender, SnapshotReceiver) {
    tokio::sync::watch::channel(Snapshot::default())
}
