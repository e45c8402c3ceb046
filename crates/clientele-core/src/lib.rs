//! Clientele Core - in-memory model and command kernel
//!
//! This crate provides everything between a line of user input and the
//! in-memory state:
//! - Person, policy and task models with validated field types
//! - Unique lists enforcing identity uniqueness, and filtered views
//! - The command inventory, its parser, and `apply()`
//! - The structured error and logging facilities shared by the other crates

pub mod apply;
pub mod commands;
pub mod commons;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod parser;
pub mod sample;

// Re-export commonly used types
pub use apply::apply;
pub use commands::{Command, CommandResult};
pub use commons::Index;
pub use errors::{ClienteleError, ExError, ExErrorKind, Result};
pub use model::{AddressBook, Model, Person, Policy, PolicyBook, Task, TaskList, UserPrefs};
pub use parser::parse_command;
