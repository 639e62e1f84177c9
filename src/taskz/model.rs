use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::store::Entity;

/// Calendar-date format used everywhere the user sees or types a date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// On disk a due date is a full timestamp with microseconds plus a timezone
// name, matching the documents earlier releases wrote.
const STORED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
const DEFAULT_TIMEZONE: &str = "UTC";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

/// A task's due date: a calendar day, no time component.
///
/// Serialized as `{ "date": "Y-m-d H:M:S.micros", "timezone": "<name>" }`.
/// The timezone name is carried through decode/encode unchanged so records
/// round-trip field-equivalently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueDate {
    pub date: NaiveDate,
    pub timezone: String,
}

#[derive(Serialize, Deserialize)]
struct DueDateRepr {
    date: String,
    timezone: String,
}

impl DueDate {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format(DATE_FORMAT))
    }
}

impl Serialize for DueDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let repr = DueDateRepr {
            date: self
                .date
                .and_time(NaiveTime::MIN)
                .format(STORED_DATE_FORMAT)
                .to_string(),
            timezone: self.timezone.clone(),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DueDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = DueDateRepr::deserialize(deserializer)?;
        let dt = NaiveDateTime::parse_from_str(&repr.date, STORED_DATE_FORMAT)
            .map_err(serde::de::Error::custom)?;
        Ok(Self {
            date: dt.date(),
            timezone: repr.timezone,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// None until the store persists the task for the first time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub due_date: DueDate,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(title: String, description: String, due_date: NaiveDate) -> Self {
        Self {
            id: None,
            title,
            description,
            due_date: DueDate::new(due_date),
            status: TaskStatus::Pending,
        }
    }

    /// Forward-only transition; calling it on a completed task is a no-op.
    pub fn mark_completed(&mut self) {
        self.status = TaskStatus::Completed;
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

impl Entity for Task {
    const KIND: &'static str = "task";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn with_id(mut self, id: Uuid) -> Self {
        if self.id.is_none() {
            self.id = Some(id);
        }
        self
    }
}
