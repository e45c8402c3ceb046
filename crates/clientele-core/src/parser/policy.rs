//! `addpolicy`, `editpolicy` and `findpolicy`

use super::syntax::{
    Prefix, PREFIX_POLICY_LINK, PREFIX_POLICY_NAME, PREFIX_POLICY_NUMBER, PREFIX_PROVIDER_COMPANY,
    USAGE_ADD_POLICY, USAGE_EDIT_POLICY, USAGE_FIND_POLICY,
};
use super::tokenizer::{tokenize, ArgumentMultimap};
use super::{invalid_format, parse_index, parse_keywords};
use crate::commands::{Command, EditPolicyDescriptor};
use crate::errors::{ClienteleError, Result};
use crate::model::policy::{PolicyLink, PolicyName, PolicyNumber, ProviderCompany};
use crate::model::{Policy, PolicyContainsKeywords};

const POLICY_PREFIXES: [Prefix; 4] = [
    PREFIX_POLICY_NUMBER,
    PREFIX_POLICY_NAME,
    PREFIX_PROVIDER_COMPANY,
    PREFIX_POLICY_LINK,
];

/// # Errors
/// `InvalidCommandFormat` when a prefix is missing or a preamble is given;
/// `DuplicatePrefixes`; field validation errors.
pub fn parse_add(arguments: &str) -> Result<Command> {
    let map = tokenize(arguments, &POLICY_PREFIXES);
    if !map.are_all_present(&POLICY_PREFIXES) || !map.preamble().is_empty() {
        return Err(invalid_format(USAGE_ADD_POLICY));
    }
    map.verify_no_duplicate_prefixes_for(&POLICY_PREFIXES)?;

    let policy = Policy::new(
        PolicyNumber::parse(required(&map, PREFIX_POLICY_NUMBER)?)?,
        PolicyName::parse(required(&map, PREFIX_POLICY_NAME)?)?,
        ProviderCompany::parse(required(&map, PREFIX_PROVIDER_COMPANY)?)?,
        PolicyLink::parse(required(&map, PREFIX_POLICY_LINK)?)?,
    );
    Ok(Command::AddPolicy(policy))
}

/// # Errors
/// `InvalidCommandFormat` for a bad index, `NothingToEdit`,
/// `DuplicatePrefixes`, field validation errors.
pub fn parse_edit(arguments: &str) -> Result<Command> {
    let map = tokenize(arguments, &POLICY_PREFIXES);
    let index = parse_index(map.preamble(), USAGE_EDIT_POLICY)?;
    map.verify_no_duplicate_prefixes_for(&POLICY_PREFIXES)?;

    let descriptor = EditPolicyDescriptor {
        policy_number: map
            .value(PREFIX_POLICY_NUMBER)
            .map(PolicyNumber::parse)
            .transpose()?,
        policy_name: map
            .value(PREFIX_POLICY_NAME)
            .map(PolicyName::parse)
            .transpose()?,
        provider_company: map
            .value(PREFIX_PROVIDER_COMPANY)
            .map(ProviderCompany::parse)
            .transpose()?,
        policy_link: map
            .value(PREFIX_POLICY_LINK)
            .map(PolicyLink::parse)
            .transpose()?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ClienteleError::NothingToEdit);
    }
    Ok(Command::EditPolicy { index, descriptor })
}

/// # Errors
/// `InvalidCommandFormat` when no keyword is given.
pub fn parse_find(arguments: &str) -> Result<Command> {
    let keywords = parse_keywords(arguments, USAGE_FIND_POLICY)?;
    Ok(Command::FindPolicies(PolicyContainsKeywords::new(keywords)))
}

fn required(map: &ArgumentMultimap, prefix: Prefix) -> Result<&str> {
    map.value(prefix)
        .ok_or_else(|| invalid_format(USAGE_ADD_POLICY))
}

#[cfg(test)]
mod tests {
    use super::*;

    const POL123: &str = " pn/POL123 pname/LifeShield pc/ShieldCorp \
pl/https://www.shieldcorp.com/policy123";

    #[test]
    fn test_add_policy() {
        let Command::AddPolicy(policy) = parse_add(POL123).unwrap() else {
            panic!("expected AddPolicy");
        };
        assert_eq!(policy.policy_number.as_str(), "POL123");
        assert_eq!(policy.provider_company.as_str(), "ShieldCorp");
    }

    #[test]
    fn test_add_invalid_number() {
        let input = POL123.replace("POL123", "Invalid123");
        assert!(matches!(
            parse_add(&input),
            Err(ClienteleError::InvalidField {
                field: "policy_number",
                ..
            })
        ));
    }

    #[test]
    fn test_edit_policy_name_only() {
        let Command::EditPolicy { descriptor, .. } = parse_edit(" 2 pname/HealthPlus").unwrap()
        else {
            panic!("expected EditPolicy");
        };
        assert_eq!(
            descriptor.policy_name.map(|name| name.as_str().to_string()),
            Some("HealthPlus".to_string())
        );
        assert!(descriptor.policy_number.is_none());
    }

    #[test]
    fn test_find_needs_keyword() {
        assert_eq!(parse_find("  "), Err(invalid_format(USAGE_FIND_POLICY)));
    }
}
