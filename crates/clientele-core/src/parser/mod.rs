//! Turns one line of user input into a [`Command`]
//!
//! The first word selects the command; the rest is handed to the
//! per-entity parser, which tokenizes it by prefix and validates each value
//! with the model's field parsers.

pub mod person;
pub mod policy;
pub mod syntax;
pub mod task;
pub mod tokenizer;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::commands::Command;
use crate::commons::Index;
use crate::errors::{ClienteleError, Result};

pub use tokenizer::{tokenize, ArgumentMultimap};

static BASIC_COMMAND_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<word>\S+)(?P<arguments>.*)$").expect("valid regex"));

/// Parse a full line of input
///
/// # Errors
/// - `InvalidCommandFormat` if the line is blank or the arguments do not
///   fit the command's usage
/// - `UnknownCommand` if the first word is not a command
/// - any field validation error raised while building the command
pub fn parse_command(input: &str) -> Result<Command> {
    let captures = BASIC_COMMAND_FORMAT
        .captures(input.trim())
        .ok_or_else(|| invalid_format(syntax::USAGE_HELP))?;
    let word = &captures["word"];
    let arguments = &captures["arguments"];

    match word {
        "add" => person::parse_add(arguments),
        "edit" => person::parse_edit(arguments),
        "delete" => parse_index(arguments, syntax::USAGE_DELETE)
            .map(|index| Command::DeletePerson { index }),
        "clear" => Ok(Command::Clear),
        "find" => person::parse_find(arguments),
        "list" => Ok(Command::ListPersons),

        "addpolicy" => policy::parse_add(arguments),
        "editpolicy" => policy::parse_edit(arguments),
        "deletepolicy" => parse_index(arguments, syntax::USAGE_DELETE_POLICY)
            .map(|index| Command::DeletePolicy { index }),
        "clearpolicy" => Ok(Command::ClearPolicies),
        "findpolicy" => policy::parse_find(arguments),
        "listpolicy" => Ok(Command::ListPolicies),

        "todo" => task::parse_todo(arguments),
        "deadline" => task::parse_deadline(arguments),
        "event" => task::parse_event(arguments),
        "edittask" => task::parse_edit(arguments),
        "mark" => {
            parse_index(arguments, syntax::USAGE_MARK).map(|index| Command::MarkTask { index })
        }
        "unmark" => parse_index(arguments, syntax::USAGE_UNMARK)
            .map(|index| Command::UnmarkTask { index }),
        "deletetask" => parse_index(arguments, syntax::USAGE_DELETE_TASK)
            .map(|index| Command::DeleteTask { index }),
        "cleartask" => Ok(Command::ClearTasks),
        "findtask" => task::parse_find(arguments),
        "listtask" => Ok(Command::ListTasks),
        "schedule" => task::parse_schedule(arguments),

        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),

        other => Err(ClienteleError::UnknownCommand {
            word: other.to_string(),
        }),
    }
}

pub(crate) fn invalid_format(usage: &str) -> ClienteleError {
    ClienteleError::InvalidCommandFormat {
        usage: usage.to_string(),
    }
}

/// An index that is the whole of `arguments`
pub(crate) fn parse_index(arguments: &str, usage: &str) -> Result<Index> {
    Index::parse(arguments).map_err(|_| invalid_format(usage))
}

/// Whitespace-separated keywords; at least one required
pub(crate) fn parse_keywords(arguments: &str, usage: &str) -> Result<Vec<String>> {
    let keywords: Vec<String> = arguments.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(invalid_format(usage));
    }
    Ok(keywords)
}
