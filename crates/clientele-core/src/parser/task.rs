//! `todo`, `deadline`, `event`, `edittask`, `findtask` and `schedule`

use super::syntax::{
    Prefix, PREFIX_BY, PREFIX_DESCRIPTION, PREFIX_FROM, PREFIX_TO, USAGE_DEADLINE,
    USAGE_EDIT_TASK, USAGE_EVENT, USAGE_FIND_TASK, USAGE_SCHEDULE, USAGE_TODO,
};
use super::tokenizer::tokenize;
use super::{invalid_format, parse_index, parse_keywords};
use crate::commands::{Command, EditTaskDescriptor};
use crate::errors::{ClienteleError, Result};
use crate::model::task::{parse_date, parse_date_time, TaskDescription};
use crate::model::{Task, TaskContainsKeywords};

const EDIT_PREFIXES: [Prefix; 4] = [PREFIX_DESCRIPTION, PREFIX_BY, PREFIX_FROM, PREFIX_TO];

/// # Errors
/// `InvalidCommandFormat` when the description is missing.
pub fn parse_todo(arguments: &str) -> Result<Command> {
    let description = arguments.trim();
    if description.is_empty() {
        return Err(invalid_format(USAGE_TODO));
    }
    Ok(Command::AddTask(Task::todo(TaskDescription::parse(
        description,
    )?)))
}

/// # Errors
/// `InvalidCommandFormat` when the description or `by/` is missing;
/// `DuplicatePrefixes`; date-time validation errors.
pub fn parse_deadline(arguments: &str) -> Result<Command> {
    let map = tokenize(arguments, &[PREFIX_BY]);
    let by = match map.value(PREFIX_BY) {
        Some(by) if !map.preamble().is_empty() => by,
        _ => return Err(invalid_format(USAGE_DEADLINE)),
    };
    map.verify_no_duplicate_prefixes_for(&[PREFIX_BY])?;

    let description = TaskDescription::parse(map.preamble())?;
    Ok(Command::AddTask(Task::deadline(
        description,
        parse_date_time(by)?,
    )))
}

/// # Errors
/// `InvalidCommandFormat` when the description, `from/` or `to/` is
/// missing; `DuplicatePrefixes`; date-time validation errors;
/// `InvalidEventRange` if the event ends before it starts.
pub fn parse_event(arguments: &str) -> Result<Command> {
    let map = tokenize(arguments, &[PREFIX_FROM, PREFIX_TO]);
    let (start, end) = match (map.value(PREFIX_FROM), map.value(PREFIX_TO)) {
        (Some(start), Some(end)) if !map.preamble().is_empty() => (start, end),
        _ => return Err(invalid_format(USAGE_EVENT)),
    };
    map.verify_no_duplicate_prefixes_for(&[PREFIX_FROM, PREFIX_TO])?;

    let task = Task::event(
        TaskDescription::parse(map.preamble())?,
        parse_date_time(start)?,
        parse_date_time(end)?,
    )?;
    Ok(Command::AddTask(task))
}

/// # Errors
/// `InvalidCommandFormat` for a bad index, `NothingToEdit`,
/// `DuplicatePrefixes`, field validation errors.
pub fn parse_edit(arguments: &str) -> Result<Command> {
    let map = tokenize(arguments, &EDIT_PREFIXES);
    let index = parse_index(map.preamble(), USAGE_EDIT_TASK)?;
    map.verify_no_duplicate_prefixes_for(&EDIT_PREFIXES)?;

    let descriptor = EditTaskDescriptor {
        description: map
            .value(PREFIX_DESCRIPTION)
            .map(TaskDescription::parse)
            .transpose()?,
        by: map.value(PREFIX_BY).map(parse_date_time).transpose()?,
        start: map.value(PREFIX_FROM).map(parse_date_time).transpose()?,
        end: map.value(PREFIX_TO).map(parse_date_time).transpose()?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ClienteleError::NothingToEdit);
    }
    Ok(Command::EditTask { index, descriptor })
}

/// # Errors
/// `InvalidCommandFormat` when no keyword is given.
pub fn parse_find(arguments: &str) -> Result<Command> {
    let keywords = parse_keywords(arguments, USAGE_FIND_TASK)?;
    Ok(Command::FindTasks(TaskContainsKeywords::new(keywords)))
}

/// # Errors
/// `InvalidCommandFormat` when no date is given; date validation errors.
pub fn parse_schedule(arguments: &str) -> Result<Command> {
    let raw = arguments.trim();
    if raw.is_empty() {
        return Err(invalid_format(USAGE_SCHEDULE));
    }
    Ok(Command::Schedule {
        date: parse_date(raw)?,
    })
}
