use super::shown_at;
use crate::commands::{CommandResult, EditPolicyDescriptor};
use crate::commons::Index;
use crate::errors::{ClienteleError, Result};
use crate::model::{EntityKind, Model, Policy, PolicyBook, PolicyContainsKeywords, ShowAll};

/// Add a policy to the policy book
///
/// # Errors
/// * `Duplicate` - A policy with the same number exists
pub fn add_policy(model: &mut Model, policy: Policy) -> Result<CommandResult> {
    let feedback = format!("New policy added: {}", policy);
    model.add_policy(policy)?;
    Ok(CommandResult::new(feedback))
}

/// Edit the policy shown at `index`
///
/// # Errors
/// * `InvalidIndex` - `index` is past the end of the displayed list
/// * `Duplicate` - The edited number belongs to another policy
pub fn edit_policy(
    model: &mut Model,
    index: Index,
    descriptor: &EditPolicyDescriptor,
) -> Result<CommandResult> {
    let target = shown_at(&model.filtered_policies(), index, EntityKind::Policy)?;
    let edited = descriptor.apply_to(&target);

    if !target.is_same_policy(&edited) && model.has_policy(&edited) {
        return Err(ClienteleError::Duplicate {
            entity: EntityKind::Policy,
        });
    }

    let feedback = format!("Edited Policy: {}", edited);
    model.set_policy(&target, edited)?;
    model.update_filtered_policies(ShowAll);
    Ok(CommandResult::new(feedback))
}

/// # Errors
/// * `InvalidIndex` - `index` is past the end of the displayed list
pub fn delete_policy(model: &mut Model, index: Index) -> Result<CommandResult> {
    let target = shown_at(&model.filtered_policies(), index, EntityKind::Policy)?;
    let removed = model.delete_policy(&target)?;
    Ok(CommandResult::new(format!("Deleted Policy: {}", removed)))
}

pub fn clear_policy_book(model: &mut Model) -> CommandResult {
    model.set_policy_book(PolicyBook::new());
    CommandResult::new("Policy book has been cleared!")
}

pub fn find_policies(model: &mut Model, predicate: PolicyContainsKeywords) -> CommandResult {
    model.update_filtered_policies(predicate);
    CommandResult::new(format!(
        "{} policies listed!",
        model.filtered_policies().len()
    ))
}

pub fn list_policies(model: &mut Model) -> CommandResult {
    model.update_filtered_policies(ShowAll);
    CommandResult::new("Listed all policies")
}
