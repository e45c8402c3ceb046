use super::shown_at;
use crate::commands::{CommandResult, EditPersonDescriptor};
use crate::commons::Index;
use crate::errors::{ClienteleError, Result};
use crate::model::{AddressBook, EntityKind, Model, NameContainsKeywords, Person, ShowAll};

/// Add a person to the address book
///
/// # Errors
/// * `Duplicate` - A person with the same name exists
pub fn add_person(model: &mut Model, person: Person) -> Result<CommandResult> {
    let feedback = format!("New person added: {}", person);
    model.add_person(person)?;
    Ok(CommandResult::new(feedback))
}

/// Edit the person shown at `index`
///
/// The person list is reset to show everyone afterwards.
///
/// # Errors
/// * `InvalidIndex` - `index` is past the end of the displayed list
/// * `Duplicate` - The edited name belongs to another person
pub fn edit_person(
    model: &mut Model,
    index: Index,
    descriptor: &EditPersonDescriptor,
) -> Result<CommandResult> {
    let target = shown_at(&model.filtered_persons(), index, EntityKind::Person)?;
    let edited = descriptor.apply_to(&target);

    if !target.is_same_person(&edited) && model.has_person(&edited) {
        return Err(ClienteleError::Duplicate {
            entity: EntityKind::Person,
        });
    }

    let feedback = format!("Edited Person: {}", edited);
    model.set_person(&target, edited)?;
    model.update_filtered_persons(ShowAll);
    Ok(CommandResult::new(feedback))
}

/// Delete the person shown at `index`
///
/// # Errors
/// * `InvalidIndex` - `index` is past the end of the displayed list
pub fn delete_person(model: &mut Model, index: Index) -> Result<CommandResult> {
    let target = shown_at(&model.filtered_persons(), index, EntityKind::Person)?;
    let removed = model.delete_person(&target)?;
    Ok(CommandResult::new(format!("Deleted Person: {}", removed)))
}

pub fn clear_address_book(model: &mut Model) -> CommandResult {
    model.set_address_book(AddressBook::new());
    CommandResult::new("Address book has been cleared!")
}

pub fn find_persons(model: &mut Model, predicate: NameContainsKeywords) -> CommandResult {
    model.update_filtered_persons(predicate);
    CommandResult::new(format!(
        "{} persons listed!",
        model.filtered_persons().len()
    ))
}

pub fn list_persons(model: &mut Model) -> CommandResult {
    model.update_filtered_persons(ShowAll);
    CommandResult::new("Listed all persons")
}
