//! Command application
//!
//! `apply()` is the single entry point for executing a [`Command`] against
//! the in-memory [`Model`].
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: a command either succeeds, or fails and leaves the
//!   model exactly as it was (books, prefs and filtered views)
//! - **No panics**: invalid input returns typed errors
//!
//! ## Example
//!
//! ```
//! use clientele_core::{apply::apply, Command, Model};
//!
//! let mut model = Model::default();
//! let result = apply(&mut model, Command::ListPersons).unwrap();
//! assert_eq!(result.feedback, "Listed all persons");
//! ```

use crate::commands::{Command, CommandResult};
use crate::errors::Result;
use crate::model::Model;
use crate::ops::{person_ops, policy_ops, task_ops};

pub const MESSAGE_HELP: &str = "Showing help.";
pub const MESSAGE_EXIT: &str = "Exiting Clientele as requested ...";

/// Execute `cmd` against `model`
///
/// Every operation validates before it mutates, so an `Err` means the model
/// was not touched.
///
/// # Errors
///
/// Returns the `ClienteleError` describing why the command was rejected:
/// an index outside the displayed list, a duplicate identity, or an edit
/// that would break a task's schedule.
///
/// # Example
///
/// ```
/// use clientele_core::{apply::apply, Command, Model};
/// use clientele_core::model::task::{Task, TaskDescription};
///
/// let mut model = Model::default();
/// let task = Task::todo(TaskDescription::parse("call Amy").unwrap());
/// apply(&mut model, Command::AddTask(task.clone())).unwrap();
///
/// let again = apply(&mut model, Command::AddTask(task));
/// assert!(again.is_err());
/// assert_eq!(model.task_list().tasks().len(), 1);
/// ```
pub fn apply(model: &mut Model, cmd: Command) -> Result<CommandResult> {
    match cmd {
        Command::AddPerson(person) => person_ops::add_person(model, person),
        Command::EditPerson { index, descriptor } => {
            person_ops::edit_person(model, index, &descriptor)
        }
        Command::DeletePerson { index } => person_ops::delete_person(model, index),
        Command::Clear => Ok(person_ops::clear_address_book(model)),
        Command::FindPersons(predicate) => Ok(person_ops::find_persons(model, predicate)),
        Command::ListPersons => Ok(person_ops::list_persons(model)),

        Command::AddPolicy(policy) => policy_ops::add_policy(model, policy),
        Command::EditPolicy { index, descriptor } => {
            policy_ops::edit_policy(model, index, &descriptor)
        }
        Command::DeletePolicy { index } => policy_ops::delete_policy(model, index),
        Command::ClearPolicies => Ok(policy_ops::clear_policy_book(model)),
        Command::FindPolicies(predicate) => Ok(policy_ops::find_policies(model, predicate)),
        Command::ListPolicies => Ok(policy_ops::list_policies(model)),

        Command::AddTask(task) => task_ops::add_task(model, task),
        Command::EditTask { index, descriptor } => task_ops::edit_task(model, index, &descriptor),
        Command::MarkTask { index } => task_ops::set_task_done(model, index, true),
        Command::UnmarkTask { index } => task_ops::set_task_done(model, index, false),
        Command::DeleteTask { index } => task_ops::delete_task(model, index),
        Command::ClearTasks => Ok(task_ops::clear_task_list(model)),
        Command::FindTasks(predicate) => Ok(task_ops::find_tasks(model, predicate)),
        Command::ListTasks => Ok(task_ops::list_tasks(model)),
        Command::Schedule { date } => Ok(task_ops::schedule_on(model, date)),

        Command::Help => Ok(CommandResult::help(MESSAGE_HELP)),
        Command::Exit => Ok(CommandResult::exit(MESSAGE_EXIT)),
    }
}
