//! Clientele Engine - Orchestration layer
//!
//! Ties the parser, the in-memory model and storage together: one line of
//! user input is parsed into a command, applied to the model, and every book
//! the command changed is written back to disk.
//!
//! ## Logging Ownership
//!
//! The engine owns lifecycle logging:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_rejected!` for input the parser or model turned down
//! - `log_op_error!` when storage fails
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

pub mod bootstrap;
pub mod logic;

pub use bootstrap::{load_model, open};
pub use logic::{Logic, Outcome};
