//! Command execution
//!
//! [`Logic`] owns the model and the storage it is persisted to. Each call to
//! [`Logic::execute`] handles one line of user input end to end.

use std::time::Instant;

use clientele_core::errors::{ClienteleError, ExError, ExErrorKind};
use clientele_core::model::EntityKind;
use clientele_core::{apply, parse_command, CommandResult, Model, Person, Policy, Task, UserPrefs};
use clientele_core::{log_op_end, log_op_error, log_op_rejected, log_op_start};
use clientele_core_types::schema::OUTCOME_OK;
use clientele_core_types::{RequestContext, Sensitive};
use clientele_store::Storage;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

const OP_EXECUTE: &str = "execute";
const OP_SHUTDOWN: &str = "shutdown";

/// Prefix of the message shown when a changed book could not be written
pub const MESSAGE_SAVE_FAILED: &str = "Could not save data to file";

/// A successfully executed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub result: CommandResult,
    /// The collection the command worked on; `None` for `help` and `exit`
    pub entity: Option<EntityKind>,
}

/// Book revisions as of the last successful save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Revisions {
    address_book: u64,
    policy_book: u64,
    task_list: u64,
}

impl Revisions {
    fn of(model: &Model) -> Self {
        Self {
            address_book: model.address_book().revision(),
            policy_book: model.policy_book().revision(),
            task_list: model.task_list().revision(),
        }
    }
}

pub struct Logic {
    model: Model,
    storage: Box<dyn Storage>,
    persisted: Revisions,
}

impl Logic {
    /// The model is taken to match what `storage` already holds
    pub fn new(model: Model, storage: Box<dyn Storage>) -> Self {
        let persisted = Revisions::of(&model);
        Self {
            model,
            storage,
            persisted,
        }
    }

    /// Parse and run one line of input, then save every book it changed
    ///
    /// # Errors
    ///
    /// - The parser or the model rejected the input; the model is unchanged
    ///   and the error carries the message to show the user.
    /// - `Persistence`: the command was applied but a changed book could not
    ///   be written. It is retried after the next command.
    pub fn execute(&mut self, input: &str) -> Result<Outcome> {
        self.execute_with(RequestContext::new(), input)
    }

    /// [`Logic::execute`] under a caller-supplied request context
    ///
    /// # Errors
    ///
    /// See [`Logic::execute`].
    pub fn execute_with(&mut self, ctx: RequestContext, input: &str) -> Result<Outcome> {
        log_op_start!(
            OP_EXECUTE,
            request_id = %ctx.request_id,
            input = ?Sensitive::new(input)
        );
        let start = Instant::now();

        let command = parse_command(input).map_err(|e| rejected(&ctx, start, e))?;
        let ctx = ctx.with_command_word(command.word());
        let entity = command.entity();
        let result = apply(&mut self.model, command).map_err(|e| rejected(&ctx, start, e))?;

        self.persist().map_err(|e| {
            log_op_error!(
                OP_EXECUTE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %ctx.request_id
            );
            e
        })?;

        log_op_end!(
            OP_EXECUTE,
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = %ctx.request_id,
            command_word = ctx.command_word.as_deref().unwrap_or_default(),
            outcome = OUTCOME_OK
        );

        Ok(Outcome { result, entity })
    }

    /// Write every book whose revision moved since it was last saved
    fn persist(&mut self) -> Result<()> {
        let current = Revisions::of(&self.model);

        if current.address_book != self.persisted.address_book {
            self.storage
                .save_address_book(self.model.address_book())
                .map_err(save_failed)?;
            self.persisted.address_book = current.address_book;
        }
        if current.policy_book != self.persisted.policy_book {
            self.storage
                .save_policy_book(self.model.policy_book())
                .map_err(save_failed)?;
            self.persisted.policy_book = current.policy_book;
        }
        if current.task_list != self.persisted.task_list {
            self.storage
                .save_task_list(self.model.task_list())
                .map_err(save_failed)?;
            self.persisted.task_list = current.task_list;
        }
        Ok(())
    }

    /// Save the user prefs; called once when the session ends
    ///
    /// # Errors
    ///
    /// `Persistence` if the prefs file could not be written.
    pub fn shutdown(&self) -> Result<()> {
        log_op_start!(OP_SHUTDOWN);
        let start = Instant::now();

        self.storage
            .save_user_prefs(self.model.user_prefs())
            .map_err(save_failed)
            .map_err(|e| {
                log_op_error!(
                    OP_SHUTDOWN,
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        log_op_end!(OP_SHUTDOWN, duration_ms = start.elapsed().as_millis() as u64);
        Ok(())
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn user_prefs(&self) -> &UserPrefs {
        self.model.user_prefs()
    }

    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.model.filtered_persons()
    }

    pub fn filtered_policies(&self) -> Vec<&Policy> {
        self.model.filtered_policies()
    }

    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.model.filtered_tasks()
    }
}

/// End the operation for input the parser or model turned down
fn rejected(ctx: &RequestContext, start: Instant, err: ClienteleError) -> ExError {
    let ex: ExError = err.into();
    log_op_rejected!(
        OP_EXECUTE,
        ex.clone(),
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id
    );
    ex
}

fn save_failed(err: ExError) -> ExError {
    let mut failed = ExError::new(ExErrorKind::Persistence)
        .with_message(format!("{}: {}", MESSAGE_SAVE_FAILED, err.message()));
    if let Some(op) = err.op() {
        failed = failed.with_op(op);
    }
    failed
}
