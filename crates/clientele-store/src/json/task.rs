use chrono::NaiveDateTime;
use clientele_core::model::task::{parse_date_time, TaskDescription};
use clientele_core::model::{EntityKind, Schedule, Task};
use serde::{Deserialize, Serialize};

use crate::errors::{data_loading, Result};

const STORED_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A task as stored on disk, tagged by kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonAdaptedTask {
    Todo {
        description: String,
        #[serde(default)]
        done: bool,
    },
    Deadline {
        description: String,
        #[serde(default)]
        done: bool,
        by: String,
    },
    Event {
        description: String,
        #[serde(default)]
        done: bool,
        from: String,
        to: String,
    },
}

fn stored(date_time: &NaiveDateTime) -> String {
    date_time.format(STORED_DATE_TIME_FORMAT).to_string()
}

impl From<&Task> for JsonAdaptedTask {
    fn from(task: &Task) -> Self {
        let description = task.description().as_str().to_string();
        let done = task.is_done();
        match task.schedule() {
            Schedule::Todo => JsonAdaptedTask::Todo { description, done },
            Schedule::Deadline { by } => JsonAdaptedTask::Deadline {
                description,
                done,
                by: stored(by),
            },
            Schedule::Event { start, end } => JsonAdaptedTask::Event {
                description,
                done,
                from: stored(start),
                to: stored(end),
            },
        }
    }
}

impl JsonAdaptedTask {
    /// # Errors
    /// `DataLoading` for a blank description, an unreadable date-time, or an
    /// event ending before it starts.
    pub fn to_model(&self) -> Result<Task> {
        let invalid = |err| data_loading(EntityKind::Task, err);

        let (description, done, schedule) = match self {
            JsonAdaptedTask::Todo { description, done } => (description, *done, Schedule::Todo),
            JsonAdaptedTask::Deadline {
                description,
                done,
                by,
            } => (
                description,
                *done,
                Schedule::Deadline {
                    by: parse_date_time(by).map_err(invalid)?,
                },
            ),
            JsonAdaptedTask::Event {
                description,
                done,
                from,
                to,
            } => (
                description,
                *done,
                Schedule::Event {
                    start: parse_date_time(from).map_err(invalid)?,
                    end: parse_date_time(to).map_err(invalid)?,
                },
            ),
        };

        let description = TaskDescription::parse(description).map_err(invalid)?;
        Ok(Task::with_schedule(description, schedule)
            .map_err(invalid)?
            .with_done(done))
    }
}
