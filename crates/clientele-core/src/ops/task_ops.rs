use chrono::NaiveDate;

use super::shown_at;
use crate::commands::{CommandResult, EditTaskDescriptor};
use crate::commons::Index;
use crate::errors::Result;
use crate::model::{EntityKind, Model, ShowAll, Task, TaskContainsKeywords, TaskList, TaskOccursOn};

/// Add a todo, deadline or event
///
/// # Errors
/// * `Duplicate` - The same task is already in the list
pub fn add_task(model: &mut Model, task: Task) -> Result<CommandResult> {
    let feedback = format!("New task added: {}", task);
    model.add_task(task)?;
    Ok(CommandResult::new(feedback))
}

/// Edit the task shown at `index`
///
/// # Errors
/// * `InvalidIndex` - `index` is past the end of the displayed list
/// * `FieldNotApplicable` - A time field the task kind does not have
/// * `InvalidEventRange` - The edited event would end before it starts
/// * `Duplicate` - The edited task is the same as another task
pub fn edit_task(
    model: &mut Model,
    index: Index,
    descriptor: &EditTaskDescriptor,
) -> Result<CommandResult> {
    let target = shown_at(&model.filtered_tasks(), index, EntityKind::Task)?;
    let edited = descriptor.apply_to(&target)?;
    let feedback = format!("Edited Task: {}", edited);
    model.set_task(&target, edited)?;
    model.update_filtered_tasks(ShowAll);
    Ok(CommandResult::new(feedback))
}

/// Set the completion flag of the task shown at `index`
///
/// # Errors
/// * `InvalidIndex` - `index` is past the end of the displayed list
pub fn set_task_done(model: &mut Model, index: Index, done: bool) -> Result<CommandResult> {
    let target = shown_at(&model.filtered_tasks(), index, EntityKind::Task)?;
    let updated = target.clone().with_done(done);
    let feedback = if done {
        format!("Marked task as done: {}", updated)
    } else {
        format!("Marked task as not done yet: {}", updated)
    };
    model.set_task(&target, updated)?;
    Ok(CommandResult::new(feedback))
}

/// # Errors
/// * `InvalidIndex` - `index` is past the end of the displayed list
pub fn delete_task(model: &mut Model, index: Index) -> Result<CommandResult> {
    let target = shown_at(&model.filtered_tasks(), index, EntityKind::Task)?;
    let removed = model.delete_task(&target)?;
    Ok(CommandResult::new(format!("Deleted Task: {}", removed)))
}

pub fn clear_task_list(model: &mut Model) -> CommandResult {
    model.set_task_list(TaskList::new());
    CommandResult::new("Task list has been cleared!")
}

pub fn find_tasks(model: &mut Model, predicate: TaskContainsKeywords) -> CommandResult {
    model.update_filtered_tasks(predicate);
    CommandResult::new(format!("{} tasks listed!", model.filtered_tasks().len()))
}

pub fn list_tasks(model: &mut Model) -> CommandResult {
    model.update_filtered_tasks(ShowAll);
    CommandResult::new("Listed all tasks")
}

/// Show the tasks falling on `date`
pub fn schedule_on(model: &mut Model, date: NaiveDate) -> CommandResult {
    model.update_filtered_tasks(TaskOccursOn(date));
    CommandResult::new(format!(
        "{} tasks scheduled on {}",
        model.filtered_tasks().len(),
        date.format("%Y-%m-%d")
    ))
}
