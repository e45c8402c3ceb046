//! `add`, `edit` and `find` for persons

use std::collections::BTreeSet;

use super::syntax::{
    PREFIX_ADDRESS, PREFIX_BIRTHDAY, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_PREMIUM,
    PREFIX_TAG, USAGE_ADD, USAGE_EDIT, USAGE_FIND, Prefix,
};
use super::tokenizer::{tokenize, ArgumentMultimap};
use super::{invalid_format, parse_index, parse_keywords};
use crate::commands::{Command, EditPersonDescriptor};
use crate::errors::{ClienteleError, Result};
use crate::model::person::{Address, Birthday, Email, Name, Phone, Premium, PremiumList, Tag};
use crate::model::{NameContainsKeywords, Person};

const ALL_PREFIXES: [Prefix; 7] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_BIRTHDAY,
    PREFIX_TAG,
    PREFIX_PREMIUM,
];

const SINGLE_VALUED: [Prefix; 5] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_BIRTHDAY,
];

/// # Errors
/// `InvalidCommandFormat` when a required prefix is missing or a preamble is
/// given; `DuplicatePrefixes`; field validation errors.
pub fn parse_add(arguments: &str) -> Result<Command> {
    let map = tokenize(arguments, &ALL_PREFIXES);
    if !map.are_all_present(&SINGLE_VALUED) || !map.preamble().is_empty() {
        return Err(invalid_format(USAGE_ADD));
    }
    map.verify_no_duplicate_prefixes_for(&SINGLE_VALUED)?;

    let person = Person::new(
        Name::parse(required(&map, PREFIX_NAME)?)?,
        Phone::parse(required(&map, PREFIX_PHONE)?)?,
        Email::parse(required(&map, PREFIX_EMAIL)?)?,
        Address::parse(required(&map, PREFIX_ADDRESS)?)?,
        Birthday::parse(required(&map, PREFIX_BIRTHDAY)?)?,
        parse_tags(&map.all_values(PREFIX_TAG))?,
        parse_premiums(&map.all_values(PREFIX_PREMIUM))?,
    );
    Ok(Command::AddPerson(person))
}

/// # Errors
/// `InvalidCommandFormat` for a bad index, `NothingToEdit` when no field is
/// given, `DuplicatePrefixes`, field validation errors.
pub fn parse_edit(arguments: &str) -> Result<Command> {
    let map = tokenize(arguments, &ALL_PREFIXES);
    let index = parse_index(map.preamble(), USAGE_EDIT)?;
    map.verify_no_duplicate_prefixes_for(&SINGLE_VALUED)?;

    let descriptor = EditPersonDescriptor {
        name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::parse).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(Address::parse).transpose()?,
        birthday: map.value(PREFIX_BIRTHDAY).map(Birthday::parse).transpose()?,
        tags: parse_tags_for_edit(&map.all_values(PREFIX_TAG))?,
        premiums: parse_premiums_for_edit(&map.all_values(PREFIX_PREMIUM))?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ClienteleError::NothingToEdit);
    }
    Ok(Command::EditPerson { index, descriptor })
}

/// # Errors
/// `InvalidCommandFormat` when no keyword is given.
pub fn parse_find(arguments: &str) -> Result<Command> {
    let keywords = parse_keywords(arguments, USAGE_FIND)?;
    Ok(Command::FindPersons(NameContainsKeywords::new(keywords)))
}

fn required(map: &ArgumentMultimap, prefix: Prefix) -> Result<&str> {
    map.value(prefix).ok_or_else(|| invalid_format(USAGE_ADD))
}

fn parse_tags(raw: &[&str]) -> Result<BTreeSet<Tag>> {
    raw.iter().map(|tag| Tag::parse(tag)).collect()
}

fn parse_premiums(raw: &[&str]) -> Result<PremiumList> {
    raw.iter()
        .map(|premium| Premium::parse(premium))
        .collect::<Result<Vec<_>>>()
        .map(PremiumList::new)
}

/// A lone empty `t/` clears all tags
fn parse_tags_for_edit(raw: &[&str]) -> Result<Option<BTreeSet<Tag>>> {
    match raw {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(raw).map(Some),
    }
}

/// A lone empty `pr/` clears all premiums
fn parse_premiums_for_edit(raw: &[&str]) -> Result<Option<PremiumList>> {
    match raw {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(PremiumList::default())),
        _ => parse_premiums(raw).map(Some),
    }
}
