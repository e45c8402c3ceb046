//! Run command
//!
//! Usage: clientele run <INPUT>...

use std::io::{self, Write};

use clap::Args;
use clientele_engine::Logic;

use crate::view;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// The command line to execute, e.g. `addpolicy pn/POL123 pname/LifeShield ...`
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub input: Vec<String>,
}

/// Execute one command line, print its outcome and save the prefs
pub fn execute(logic: &mut Logic, args: RunArgs) -> anyhow::Result<()> {
    let input = args.input.join(" ");
    let outcome = logic
        .execute(&input)
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;

    let mut out = io::stdout().lock();
    view::print_result(&mut out, logic, &outcome)?;
    out.flush()?;

    logic.shutdown()?;
    Ok(())
}
