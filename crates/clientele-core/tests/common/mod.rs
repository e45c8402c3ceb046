#![allow(dead_code)]

use std::collections::BTreeSet;

use clientele_core::model::person::{
    Address, Birthday, Email, Name, Phone, Premium, PremiumList, Tag,
};
use clientele_core::model::policy::{PolicyLink, PolicyName, PolicyNumber, ProviderCompany};
use clientele_core::model::task::{parse_date_time, TaskDescription};
use clientele_core::{
    apply, AddressBook, Command, CommandResult, Model, Person, Policy, PolicyBook, Task, TaskList,
    UserPrefs,
};

pub const VALID_NAME_AMY: &str = "Amy Bee";
pub const VALID_NAME_BOB: &str = "Bob Choo";
pub const VALID_PHONE_BOB: &str = "22222222";
pub const VALID_EMAIL_BOB: &str = "bob@example.com";
pub const VALID_TAG_HUSBAND: &str = "husband";
pub const VALID_PREMIUM_BOB: &str = "ElderShield 200";

/// Builds a `Person`, defaulting to Amy's details
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    birthday: String,
    tags: Vec<String>,
    premiums: Vec<String>,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self {
            name: VALID_NAME_AMY.to_string(),
            phone: "11111111".to_string(),
            email: "amy@example.com".to_string(),
            address: "Block 312, Amy Street 1".to_string(),
            birthday: "2002-02-09".to_string(),
            tags: vec!["friend".to_string()],
            premiums: vec!["LifeShield 100".to_string()],
        }
    }
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name.as_str().to_string(),
            phone: person.phone.as_str().to_string(),
            email: person.email.as_str().to_string(),
            address: person.address.as_str().to_string(),
            birthday: person.birthday.to_string(),
            tags: person.tags.iter().map(|t| t.as_str().to_string()).collect(),
            premiums: person.premiums.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn with_birthday(mut self, birthday: &str) -> Self {
        self.birthday = birthday.to_string();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_premiums(mut self, premiums: &[&str]) -> Self {
        self.premiums = premiums.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn build(self) -> Person {
        Person::new(
            Name::parse(&self.name).unwrap(),
            Phone::parse(&self.phone).unwrap(),
            Email::parse(&self.email).unwrap(),
            Address::parse(&self.address).unwrap(),
            Birthday::parse(&self.birthday).unwrap(),
            self.tags
                .iter()
                .map(|t| Tag::parse(t).unwrap())
                .collect::<BTreeSet<_>>(),
            PremiumList::new(
                self.premiums
                    .iter()
                    .map(|p| Premium::parse(p).unwrap())
                    .collect(),
            ),
        )
    }
}

/// Builds a `Policy`, defaulting to POL123
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    number: String,
    name: String,
    provider: String,
    link: String,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self {
            number: "POL123".to_string(),
            name: "LifeShield".to_string(),
            provider: "ShieldCorp".to_string(),
            link: "https://www.shieldcorp.com/policy123".to_string(),
        }
    }
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_number(mut self, number: &str) -> Self {
        self.number = number.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_provider(mut self, provider: &str) -> Self {
        self.provider = provider.to_string();
        self
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = link.to_string();
        self
    }

    pub fn build(self) -> Policy {
        Policy::new(
            PolicyNumber::parse(&self.number).unwrap(),
            PolicyName::parse(&self.name).unwrap(),
            ProviderCompany::parse(&self.provider).unwrap(),
            PolicyLink::parse(&self.link).unwrap(),
        )
    }
}

pub fn alice() -> Person {
    PersonBuilder::new()
        .with_name("Alice Pauline")
        .with_phone("94351253")
        .with_email("alice@example.com")
        .with_address("123, Jurong West Ave 6, #08-111")
        .with_birthday("1990-01-01")
        .with_tags(&["friends"])
        .with_premiums(&["LifeShield 300"])
        .build()
}

pub fn benson() -> Person {
    PersonBuilder::new()
        .with_name("Benson Meier")
        .with_phone("98765432")
        .with_email("johnd@example.com")
        .with_address("311, Clementi Ave 2, #02-25")
        .with_birthday("1985-06-15")
        .with_tags(&["owesMoney", "friends"])
        .with_premiums(&[])
        .build()
}

pub fn carl() -> Person {
    PersonBuilder::new()
        .with_name("Carl Kurz")
        .with_phone("95352563")
        .with_email("heinz@example.com")
        .with_address("wall street")
        .with_birthday("1978-11-23")
        .with_tags(&[])
        .with_premiums(&[])
        .build()
}

pub fn daniel() -> Person {
    PersonBuilder::new()
        .with_name("Daniel Meier")
        .with_phone("87652533")
        .with_email("cornelia@example.com")
        .with_address("10th street")
        .with_birthday("2000-03-08")
        .with_tags(&["friends"])
        .with_premiums(&["HealthPlus 150"])
        .build()
}

pub fn bob() -> Person {
    PersonBuilder::new()
        .with_name(VALID_NAME_BOB)
        .with_phone(VALID_PHONE_BOB)
        .with_email(VALID_EMAIL_BOB)
        .with_address("Block 123, Bobby Street 3")
        .with_birthday("2002-11-12")
        .with_tags(&[VALID_TAG_HUSBAND])
        .with_premiums(&[VALID_PREMIUM_BOB])
        .build()
}

pub fn pol101() -> Policy {
    PolicyBuilder::new()
        .with_number("POL101")
        .with_name("HomeSafe")
        .with_provider("HomeGuard")
        .with_link("https://www.homeguard.com/policy101")
        .build()
}

pub fn pol456() -> Policy {
    PolicyBuilder::new()
        .with_number("POL456")
        .with_name("HealthPlus")
        .with_provider("HealthCorp")
        .with_link("https://www.healthcorp.com/policy456")
        .build()
}

pub fn todo(description: &str) -> Task {
    Task::todo(TaskDescription::parse(description).unwrap())
}

pub fn deadline(description: &str, by: &str) -> Task {
    Task::deadline(
        TaskDescription::parse(description).unwrap(),
        parse_date_time(by).unwrap(),
    )
}

pub fn event(description: &str, start: &str, end: &str) -> Task {
    Task::event(
        TaskDescription::parse(description).unwrap(),
        parse_date_time(start).unwrap(),
        parse_date_time(end).unwrap(),
    )
    .unwrap()
}

pub fn typical_address_book() -> AddressBook {
    AddressBook::with_persons(vec![alice(), benson(), carl(), daniel()]).unwrap()
}

pub fn typical_policy_book() -> PolicyBook {
    PolicyBook::with_policies(vec![PolicyBuilder::new().build(), pol101()]).unwrap()
}

pub fn typical_task_list() -> TaskList {
    TaskList::with_tasks(vec![
        todo("call Alice about renewal"),
        deadline("submit claim for Benson", "2024-10-14 18:00"),
        event("client seminar", "2024-10-14 09:00", "2024-10-16 17:00"),
    ])
    .unwrap()
}

pub fn typical_model() -> Model {
    Model::new(
        typical_address_book(),
        typical_policy_book(),
        typical_task_list(),
        UserPrefs::default(),
    )
}

/// Applies `cmd` and checks both the feedback and the resulting model
pub fn assert_command_success(
    cmd: Command,
    model: &mut Model,
    expected_feedback: &str,
    expected_model: &Model,
) {
    let result = apply(model, cmd).expect("command should succeed");
    assert_eq!(result, CommandResult::new(expected_feedback));
    assert_eq!(*model, *expected_model);
}

/// Applies `cmd` and checks the error message and that nothing changed
pub fn assert_command_failure(cmd: Command, model: &mut Model, expected_message: &str) {
    let before = model.clone();
    let err = apply(model, cmd).expect_err("command should fail");
    assert_eq!(err.to_string(), expected_message);
    assert_eq!(*model, before);
    assert_eq!(model.revision(), before.revision());
}
