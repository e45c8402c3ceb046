//! Interactive session
//!
//! Reads one command per line until `exit` or end of input.

use std::io::{self, BufRead, Write};

use clientele_engine::Logic;

use crate::view;

const PROMPT: &str = "> ";
const WELCOME: &str = "Welcome to Clientele! Type `help` to see the available commands.";

pub fn execute(logic: &mut Logic) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(logic, stdin.lock(), stdout.lock())
}

/// Run a session and save the prefs however it ended
///
/// A session error takes precedence over a failed prefs save.
fn run<R: BufRead, W: Write>(logic: &mut Logic, input: R, out: W) -> anyhow::Result<()> {
    let ended = session(logic, input, out);
    let saved = logic.shutdown();
    ended?;
    saved?;
    Ok(())
}

/// Drive `logic` from `input`, writing feedback and views to `out`
pub fn session<R: BufRead, W: Write>(logic: &mut Logic, input: R, mut out: W) -> anyhow::Result<()> {
    writeln!(out, "{}", WELCOME)?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match logic.execute(&line) {
                Ok(outcome) => {
                    view::print_result(&mut out, logic, &outcome)?;
                    if outcome.result.exit {
                        break;
                    }
                }
                Err(e) => writeln!(out, "{}", e.message())?,
            }
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    Ok(())
}
