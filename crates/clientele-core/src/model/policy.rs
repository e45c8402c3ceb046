//! Insurance policy model

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::person::check;
use super::unique_list::Identity;
use super::EntityKind;
use crate::errors::Result;

static POLICY_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]+[0-9]+$").expect("valid policy number regex"));
static POLICY_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid policy name regex"));
static PROVIDER_COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 &.,'\-]*$").expect("valid provider company regex")
});
static POLICY_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9][A-Za-z0-9.\-]*(:[0-9]+)?(/\S*)?$")
        .expect("valid policy link regex")
});

pub const POLICY_NUMBER_CONSTRAINTS: &str =
    "Policy numbers should be upper-case letters followed by digits, e.g. POL123";
pub const POLICY_NAME_CONSTRAINTS: &str =
    "Policy names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const PROVIDER_COMPANY_CONSTRAINTS: &str = "Provider companies should start with an \
alphanumeric character and only contain alphanumeric characters, spaces and &.,'-";
pub const POLICY_LINK_CONSTRAINTS: &str =
    "Policy links should be http:// or https:// URLs, e.g. https://www.shieldcorp.com/policy123";

/// Identity field of a policy
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolicyNumber(String);

impl PolicyNumber {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        check(
            POLICY_NUMBER_RE.is_match(trimmed),
            "policy_number",
            POLICY_NUMBER_CONSTRAINTS,
        )?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolicyName(String);

impl PolicyName {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        check(
            POLICY_NAME_RE.is_match(trimmed),
            "policy_name",
            POLICY_NAME_CONSTRAINTS,
        )?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderCompany(String);

impl ProviderCompany {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        check(
            PROVIDER_COMPANY_RE.is_match(trimmed),
            "provider_company",
            PROVIDER_COMPANY_CONSTRAINTS,
        )?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolicyLink(String);

impl PolicyLink {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        check(
            POLICY_LINK_RE.is_match(trimmed),
            "policy_link",
            POLICY_LINK_CONSTRAINTS,
        )?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An insurance product a client may hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub policy_number: PolicyNumber,
    pub policy_name: PolicyName,
    pub provider_company: ProviderCompany,
    pub policy_link: PolicyLink,
}

impl Policy {
    pub fn new(
        policy_number: PolicyNumber,
        policy_name: PolicyName,
        provider_company: ProviderCompany,
        policy_link: PolicyLink,
    ) -> Self {
        Self {
            policy_number,
            policy_name,
            provider_company,
            policy_link,
        }
    }

    /// Returns true if both policies carry the same policy number
    pub fn is_same_policy(&self, other: &Policy) -> bool {
        self.policy_number == other.policy_number
    }
}

impl Identity for Policy {
    const ENTITY: EntityKind = EntityKind::Policy;

    fn same_identity(&self, other: &Self) -> bool {
        self.is_same_policy(other)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Name: {}; Provider: {}; Link: {}",
            self.policy_number, self.policy_name, self.provider_company, self.policy_link
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(number: &str, link: &str) -> Policy {
        Policy::new(
            PolicyNumber::parse(number).unwrap(),
            PolicyName::parse("LifeShield").unwrap(),
            ProviderCompany::parse("ShieldCorp").unwrap(),
            PolicyLink::parse(link).unwrap(),
        )
    }

    #[test]
    fn test_field_validation() {
        assert!(PolicyNumber::parse("Invalid123").is_err());
        assert!(PolicyNumber::parse("POL").is_err());
        assert!(PolicyNumber::parse("POL123").is_ok());
        assert!(PolicyName::parse("Invalid$Name").is_err());
        assert!(ProviderCompany::parse("Invalid*Company").is_err());
        assert!(ProviderCompany::parse("Smith & Sons Pte. Ltd.").is_ok());
        assert!(PolicyLink::parse("invalid-link").is_err());
        assert!(PolicyLink::parse("https://www.shieldcorp.com/policy123").is_ok());
    }

    #[test]
    fn test_same_policy_uses_policy_number_only() {
        let a = policy("POL101", "https://www.homeguard.com/policy101");
        let b = policy("POL101", "https://www.homeguard.com/policy102");
        assert!(a.is_same_policy(&b));
        assert_ne!(a, b);

        let c = policy("POL456", "https://www.homeguard.com/policy101");
        assert!(!a.is_same_policy(&c));
    }
}
