//! Task list model: todos, deadlines and events

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::person::check;
use super::unique_list::Identity;
use super::EntityKind;
use crate::errors::{ClienteleError, Result};

pub const DESCRIPTION_CONSTRAINTS: &str = "Task descriptions should not be blank";
pub const DATE_TIME_CONSTRAINTS: &str =
    "Date-times should be in the format yyyy-MM-dd HH:mm or yyyy-MM-dd";

const INPUT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
const OUTPUT_FORMAT: &str = "%A, %b %d %Y, %-I:%M%p";

/// Parse `yyyy-MM-dd HH:mm`, or `yyyy-MM-dd` meaning midnight
pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, INPUT_DATE_TIME_FORMAT) {
        return Ok(date_time);
    }
    NaiveDate::parse_from_str(trimmed, INPUT_DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| ClienteleError::InvalidField {
            field: "date_time",
            reason: DATE_TIME_CONSTRAINTS,
        })
}

/// Parse a calendar date in `yyyy-MM-dd`
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_DATE_FORMAT).map_err(|_| {
        ClienteleError::InvalidField {
            field: "date",
            reason: DATE_TIME_CONSTRAINTS,
        }
    })
}

fn format_output(date_time: &NaiveDateTime) -> String {
    date_time.format(OUTPUT_FORMAT).to_string().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskDescription(String);

impl TaskDescription {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        check(!trimmed.is_empty(), "description", DESCRIPTION_CONSTRAINTS)?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used for identity: lower-cased
    pub fn identity_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// When a task happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schedule {
    Todo,
    Deadline {
        by: NaiveDateTime,
    },
    Event {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Schedule {
    /// Lower-case kind label used in messages and storage
    pub fn kind(&self) -> &'static str {
        match self {
            Schedule::Todo => "todo",
            Schedule::Deadline { .. } => "deadline",
            Schedule::Event { .. } => "event",
        }
    }

    fn marker(&self) -> char {
        match self {
            Schedule::Todo => 'T',
            Schedule::Deadline { .. } => 'D',
            Schedule::Event { .. } => 'E',
        }
    }
}

/// An entry in the task list
///
/// Fields are private so an event can never hold an end before its start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: TaskDescription,
    done: bool,
    schedule: Schedule,
}

impl Task {
    pub fn todo(description: TaskDescription) -> Self {
        Self {
            description,
            done: false,
            schedule: Schedule::Todo,
        }
    }

    pub fn deadline(description: TaskDescription, by: NaiveDateTime) -> Self {
        Self {
            description,
            done: false,
            schedule: Schedule::Deadline { by },
        }
    }

    /// Create an event
    ///
    /// # Errors
    /// `InvalidEventRange` if `start` is after `end`.
    pub fn event(
        description: TaskDescription,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self> {
        Self::with_schedule(description, Schedule::Event { start, end })
    }

    /// Build a task from any schedule, enforcing the event range invariant
    pub fn with_schedule(description: TaskDescription, schedule: Schedule) -> Result<Self> {
        if let Schedule::Event { start, end } = schedule {
            if start > end {
                return Err(ClienteleError::InvalidEventRange);
            }
        }
        Ok(Self {
            description,
            done: false,
            schedule,
        })
    }

    /// Same task with the given completion flag
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    pub fn description(&self) -> &TaskDescription {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Whether the task falls on `date`
    ///
    /// Deadlines are due on their date; events cover every day from the start
    /// date to the end date inclusive; todos are never scheduled.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self.schedule {
            Schedule::Todo => false,
            Schedule::Deadline { by } => by.date() == date,
            Schedule::Event { start, end } => start.date() <= date && date <= end.date(),
        }
    }

    /// Same kind, same description (ignoring case) and same times
    pub fn is_same_task(&self, other: &Task) -> bool {
        self.schedule == other.schedule
            && self.description.identity_key() == other.description.identity_key()
    }
}

impl Identity for Task {
    const ENTITY: EntityKind = EntityKind::Task;

    fn same_identity(&self, other: &Self) -> bool {
        self.is_same_task(other)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.done { 'X' } else { ' ' };
        write!(
            f,
            "[{}][{}] {}",
            self.schedule.marker(),
            status,
            self.description
        )?;
        match &self.schedule {
            Schedule::Todo => Ok(()),
            Schedule::Deadline { by } => write!(f, " (by: {})", format_output(by)),
            Schedule::Event { start, end } => write!(
                f,
                " (from: {} to: {})",
                format_output(start),
                format_output(end)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> NaiveDateTime {
        parse_date_time(raw).unwrap()
    }

    fn desc(raw: &str) -> TaskDescription {
        TaskDescription::parse(raw).unwrap()
    }

    #[test]
    fn test_event_rejects_start_after_end() {
        let result = Task::event(desc("retreat"), at("2024-10-15 10:00"), at("2024-10-14 10:00"));
        assert_eq!(result, Err(ClienteleError::InvalidEventRange));
    }

    #[test]
    fn test_event_allows_zero_length() {
        let t = at("2024-10-15 10:00");
        assert!(Task::event(desc("call"), t, t).is_ok());
    }

    #[test]
    fn test_parse_date_time_accepts_date_only() {
        assert_eq!(at("2024-10-14"), at("2024-10-14 00:00"));
        assert!(parse_date_time("14/10/2024").is_err());
    }

    #[test]
    fn test_display_formats() {
        let todo = Task::todo(desc("read book")).with_done(true);
        assert_eq!(todo.to_string(), "[T][X] read book");

        let deadline = Task::deadline(desc("submit claim"), at("2024-10-14 18:00"));
        assert_eq!(
            deadline.to_string(),
            "[D][ ] submit claim (by: monday, oct 14 2024, 6:00pm)"
        );
    }

    #[test]
    fn test_occurs_on() {
        let event = Task::event(
            desc("conference"),
            at("2024-10-14 09:00"),
            at("2024-10-16 17:00"),
        )
        .unwrap();
        assert!(event.occurs_on(parse_date("2024-10-15").unwrap()));
        assert!(event.occurs_on(parse_date("2024-10-16").unwrap()));
        assert!(!event.occurs_on(parse_date("2024-10-17").unwrap()));
        assert!(!Task::todo(desc("x")).occurs_on(parse_date("2024-10-15").unwrap()));
    }

    #[test]
    fn test_identity_ignores_done_flag_and_case() {
        let a = Task::todo(desc("Call Amy"));
        let b = Task::todo(desc("call amy")).with_done(true);
        assert!(a.is_same_task(&b));
        assert_ne!(a, b);

        let c = Task::deadline(desc("Call Amy"), at("2024-10-14"));
        assert!(!a.is_same_task(&c));
    }
}
