//! Schedulable task records

use std::fmt::{Display, Formatter};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The opaque identifier of a [`Task`].
///
/// Assigned by the store when a task is created, and never changed afterwards.
/// This is the sole key for updates and deletions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId {
    content: String,
}

impl TaskId {
    /// Generate a random TaskId
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// The complete replacement set of a task's mutable fields.
///
/// This is the payload of both [`create`](crate::TaskStore::create) and
/// [`update`](crate::TaskStore::update): there are no partial patches, the four
/// fields are always applied wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskFields {
    /// The display name of the task
    pub name: String,
    /// A free-text category label, only used for display grouping
    #[serde(rename = "type")]
    pub kind: String,
    /// Wall-clock start, as a formatted `HH:mm` string
    #[serde(rename = "startTime")]
    pub start_time: String,
    /// Wall-clock end, as a formatted `HH:mm` string.
    /// The store does not check it against `start_time`, see [`Task`]
    #[serde(rename = "endTime")]
    pub end_time: String,
}

/// A single schedulable activity.
///
/// The four mutable fields are independent of each other; in particular the
/// store never cross-validates `end_time` against `start_time` (a UI layer may
/// well enforce `end >= start` when tasks are typed in, but records holding any
/// text are accepted and persisted as-is).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "startTime")]
    start_time: String,
    #[serde(rename = "endTime")]
    end_time: String,
}

impl Task {
    pub(crate) fn new(id: TaskId, fields: TaskFields) -> Self {
        Self {
            id,
            name: fields.name,
            kind: fields.kind,
            start_time: fields.start_time,
            end_time: fields.end_time,
        }
    }

    pub fn id(&self) -> &TaskId      { &self.id         }
    pub fn name(&self) -> &str       { &self.name       }
    pub fn kind(&self) -> &str       { &self.kind       }
    pub fn start_time(&self) -> &str { &self.start_time }
    pub fn end_time(&self) -> &str   { &self.end_time   }

    /// The current values of the four mutable fields
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            name: self.name.clone(),
            kind: self.kind.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }

    /// Overwrite the four mutable fields wholesale, returning their previous
    /// values. The id is left untouched.
    pub(crate) fn replace_fields(&mut self, fields: TaskFields) -> TaskFields {
        let previous = self.fields();
        self.name = fields.name;
        self.kind = fields.kind;
        self.start_time = fields.start_time;
        self.end_time = fields.end_time;
        previous
    }

    /// The start time parsed as a time of day, or `None` if the stored text is
    /// not valid `HH:mm`
    pub fn start_time_of_day(&self) -> Option<NaiveTime> {
        parse_time_of_day(&self.start_time)
    }

    /// The end time parsed as a time of day, or `None` if the stored text is
    /// not valid `HH:mm`
    pub fn end_time_of_day(&self) -> Option<NaiveTime> {
        parse_time_of_day(&self.end_time)
    }
}

fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text, "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_parsing() {
        let task = Task::new(TaskId::random(), TaskFields {
            name: "Standup".to_string(),
            kind: "meeting".to_string(),
            start_time: "09:00".to_string(),
            end_time: "quarter past nine".to_string(),
        });

        assert_eq!(task.start_time_of_day(), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(task.end_time_of_day(), None);
    }

    #[test]
    fn ids_are_random() {
        assert_ne!(TaskId::random(), TaskId::random());
    }
}
