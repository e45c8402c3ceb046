//! Terminal rendering of command outcomes
//!
//! After each command the list it worked on is printed, numbered the way
//! index arguments refer to it.

use std::fmt::Display;
use std::io::Write;

use clientele_core::model::EntityKind;
use clientele_core::parser::syntax;
use clientele_engine::{Logic, Outcome};

const USAGES: &[&str] = &[
    syntax::USAGE_ADD,
    syntax::USAGE_EDIT,
    syntax::USAGE_DELETE,
    syntax::USAGE_CLEAR,
    syntax::USAGE_FIND,
    syntax::USAGE_LIST,
    syntax::USAGE_ADD_POLICY,
    syntax::USAGE_EDIT_POLICY,
    syntax::USAGE_DELETE_POLICY,
    syntax::USAGE_CLEAR_POLICY,
    syntax::USAGE_FIND_POLICY,
    syntax::USAGE_LIST_POLICY,
    syntax::USAGE_TODO,
    syntax::USAGE_DEADLINE,
    syntax::USAGE_EVENT,
    syntax::USAGE_EDIT_TASK,
    syntax::USAGE_MARK,
    syntax::USAGE_UNMARK,
    syntax::USAGE_DELETE_TASK,
    syntax::USAGE_CLEAR_TASK,
    syntax::USAGE_FIND_TASK,
    syntax::USAGE_LIST_TASK,
    syntax::USAGE_SCHEDULE,
    syntax::USAGE_HELP,
    syntax::USAGE_EXIT,
];

pub fn print_result<W: Write>(
    out: &mut W,
    logic: &Logic,
    outcome: &Outcome,
) -> std::io::Result<()> {
    let result = &outcome.result;
    writeln!(out, "{}", result.feedback)?;

    if result.show_help {
        return print_help(out);
    }
    if result.exit {
        return Ok(());
    }

    match outcome.entity {
        Some(EntityKind::Person) => print_numbered(out, "Persons", &logic.filtered_persons()),
        Some(EntityKind::Policy) => print_numbered(out, "Policies", &logic.filtered_policies()),
        Some(EntityKind::Task) => print_numbered(out, "Tasks", &logic.filtered_tasks()),
        None => Ok(()),
    }
}

fn print_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    for usage in USAGES {
        writeln!(out)?;
        writeln!(out, "{}", usage)?;
    }
    Ok(())
}

fn print_numbered<W: Write, T: Display>(
    out: &mut W,
    title: &str,
    items: &[&T],
) -> std::io::Result<()> {
    writeln!(out, "{} ({}):", title, items.len())?;
    for (i, item) in items.iter().enumerate() {
        writeln!(out, "{:>3}. {}", i + 1, item)?;
    }
    Ok(())
}
