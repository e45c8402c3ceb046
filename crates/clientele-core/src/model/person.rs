//! Person (client) model and its validated field types
//!
//! Every field type can only be constructed through `parse`, so a `Person`
//! value is valid by construction. The same `parse` functions back both the
//! command parser and JSON loading.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use super::policy::PolicyName;
use super::unique_list::Identity;
use super::EntityKind;
use crate::errors::{ClienteleError, Result};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9]+([+_.\-][a-zA-Z0-9]+)*@([a-zA-Z0-9]+(-[a-zA-Z0-9]+)*\.)*[a-zA-Z0-9][a-zA-Z0-9\-]*[a-zA-Z0-9]$",
    )
    .expect("valid email regex")
});
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}]+$").expect("valid tag regex"));

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain. \
The local-part should only contain alphanumeric characters and the special characters +_.- \
and may not start or end with a special character. The domain is made up of labels \
separated by periods; the last label must be at least 2 characters long.";
pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";
pub const BIRTHDAY_CONSTRAINTS: &str =
    "Birthdays should be a valid date in the format yyyy-MM-dd and must not be in the future";
pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";
pub const PREMIUM_CONSTRAINTS: &str = "Premiums should be in the format POLICY_NAME AMOUNT, \
where POLICY_NAME is alphanumeric and AMOUNT is a non-negative whole number";

pub(crate) fn check(valid: bool, field: &'static str, reason: &'static str) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(ClienteleError::InvalidField { field, reason })
    }
}

/// A person's full name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        check(NAME_RE.is_match(trimmed), "name", NAME_CONSTRAINTS)?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used for identity: lower-cased, single-spaced
    pub fn identity_key(&self) -> String {
        self.0
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        check(PHONE_RE.is_match(trimmed), "phone", PHONE_CONSTRAINTS)?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        check(EMAIL_RE.is_match(trimmed), "email", EMAIL_CONSTRAINTS)?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        check(!trimmed.is_empty(), "address", ADDRESS_CONSTRAINTS)?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn parse(raw: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(raw.trim(), Self::FORMAT).map_err(|_| {
            ClienteleError::InvalidField {
                field: "birthday",
                reason: BIRTHDAY_CONSTRAINTS,
            }
        })?;
        check(
            date <= Local::now().date_naive(),
            "birthday",
            BIRTHDAY_CONSTRAINTS,
        )?;
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        check(TAG_RE.is_match(trimmed), "tag", TAG_CONSTRAINTS)?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// A premium the client pays towards a named policy
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Premium {
    policy_name: PolicyName,
    amount: u64,
}

impl Premium {
    /// Parse `<policy name> <amount>`; the amount is the last word
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || ClienteleError::InvalidField {
            field: "premium",
            reason: PREMIUM_CONSTRAINTS,
        };
        let (name, amount) = raw.trim().rsplit_once(char::is_whitespace).ok_or_else(invalid)?;
        let amount_str = amount.trim();
        if !amount_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let amount = amount_str.parse::<u64>().map_err(|_| invalid())?;
        let policy_name = PolicyName::parse(name).map_err(|_| invalid())?;
        Ok(Self {
            policy_name,
            amount,
        })
    }

    pub fn policy_name(&self) -> &PolicyName {
        &self.policy_name
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }
}

impl fmt::Display for Premium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.policy_name, self.amount)
    }
}

/// Ordered list of premiums held by a person
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PremiumList(Vec<Premium>);

impl PremiumList {
    pub fn new(premiums: Vec<Premium>) -> Self {
        Self(premiums)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Premium> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Sum of all premium amounts; `None` if it does not fit in a `u64`
    pub fn total(&self) -> Option<u64> {
        self.0
            .iter()
            .map(Premium::amount)
            .try_fold(0u64, u64::checked_add)
    }
}

impl fmt::Display for PremiumList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}

/// A client in the address book
///
/// Identity is the name, compared case-insensitively with whitespace
/// collapsed. `==` compares every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub birthday: Birthday,
    pub tags: BTreeSet<Tag>,
    pub premiums: PremiumList,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        birthday: Birthday,
        tags: BTreeSet<Tag>,
        premiums: PremiumList,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            birthday,
            tags,
            premiums,
        }
    }

    /// Returns true if both persons have the same name
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name.identity_key() == other.name.identity_key()
    }
}

impl Identity for Person {
    const ENTITY: EntityKind = EntityKind::Person;

    fn same_identity(&self, other: &Self) -> bool {
        self.is_same_person(other)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Birthday: {}; Tags: ",
            self.name, self.phone, self.email, self.address, self.birthday
        )?;
        for tag in &self.tags {
            write!(f, "{}", tag)?;
        }
        write!(f, "; Premiums: {}", self.premiums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rejects_symbols_and_blank() {
        assert!(Name::parse("James&").is_err());
        assert!(Name::parse("   ").is_err());
        assert!(Name::parse("Peter Jack 2nd").is_ok());
    }

    #[test]
    fn test_name_identity_key_ignores_case_and_spacing() {
        let a = Name::parse("Amy  Bee").unwrap();
        let b = Name::parse("amy bee").unwrap();
        assert_eq!(a.identity_key(), b.identity_key());
    }

    #[test]
    fn test_phone_requires_three_digits() {
        assert!(Phone::parse("91").is_err());
        assert!(Phone::parse("911a").is_err());
        assert!(Phone::parse("911").is_ok());
    }

    #[test]
    fn test_email_formats() {
        assert!(Email::parse("amy@example.com").is_ok());
        assert!(Email::parse("a+b.c@sub-domain.example.org").is_ok());
        assert!(Email::parse("bob!yahoo").is_err());
        assert!(Email::parse("-amy@example.com").is_err());
        assert!(Email::parse("amy@example.c").is_err());
        assert!(Email::parse("amy@-example.com").is_err());
    }

    #[test]
    fn test_birthday_rejects_invalid_and_future_dates() {
        assert!(Birthday::parse("02-30-2000").is_err());
        assert!(Birthday::parse("2000-02-30").is_err());
        assert!(Birthday::parse("9999-01-01").is_err());
        assert_eq!(
            Birthday::parse("2002-02-09").unwrap().to_string(),
            "2002-02-09"
        );
    }

    #[test]
    fn test_tag_must_be_alphanumeric() {
        assert!(Tag::parse("hubby*").is_err());
        assert!(Tag::parse("friend").is_ok());
    }

    #[test]
    fn test_premium_parse() {
        let premium = Premium::parse("LifeShield 100").unwrap();
        assert_eq!(premium.policy_name().as_str(), "LifeShield");
        assert_eq!(premium.amount(), 100);

        let multi_word = Premium::parse("Elder Shield Plus 250").unwrap();
        assert_eq!(multi_word.policy_name().as_str(), "Elder Shield Plus");

        assert!(Premium::parse(" asd -9999").is_err());
        assert!(Premium::parse("LifeShield").is_err());
        assert!(Premium::parse("100").is_err());
    }

    #[test]
    fn test_premium_list_total() {
        let list = PremiumList::new(vec![
            Premium::parse("LifeShield 100").unwrap(),
            Premium::parse("ElderShield 200").unwrap(),
        ]);
        assert_eq!(list.total(), Some(300));
        assert_eq!(list.to_string(), "[LifeShield 100, ElderShield 200]");
    }

    #[test]
    fn test_premium_list_total_overflow() {
        let list = PremiumList::new(vec![
            Premium::parse(&format!("LifeShield {}", u64::MAX)).unwrap(),
            Premium::parse("HomeSafe 1").unwrap(),
        ]);
        assert_eq!(list.total(), None);
        assert_eq!(PremiumList::default().total(), Some(0));
    }
}
