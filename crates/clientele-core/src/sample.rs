//! Starter data for a first run with no address book on disk

use crate::errors::Result;
use crate::model::person::{Address, Birthday, Email, Name, Phone, Premium, PremiumList, Tag};
use crate::model::policy::{PolicyLink, PolicyName, PolicyNumber, ProviderCompany};
use crate::model::{AddressBook, Person, Policy, PolicyBook};

struct SamplePerson {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    birthday: &'static str,
    tags: &'static [&'static str],
    premiums: &'static [&'static str],
}

const SAMPLE_PERSONS: &[SamplePerson] = &[
    SamplePerson {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        birthday: "1990-01-01",
        tags: &["friends"],
        premiums: &["LifeShield 300"],
    },
    SamplePerson {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        birthday: "1985-06-15",
        tags: &["colleagues", "friends"],
        premiums: &["HealthPlus 150", "HomeSafe 90"],
    },
    SamplePerson {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        birthday: "1978-11-23",
        tags: &["neighbours"],
        premiums: &[],
    },
    SamplePerson {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        birthday: "2000-03-08",
        tags: &["family"],
        premiums: &["LifeShield 120"],
    },
];

const SAMPLE_POLICIES: &[[&str; 4]] = &[
    [
        "POL123",
        "LifeShield",
        "ShieldCorp",
        "https://www.shieldcorp.com/policy123",
    ],
    [
        "POL101",
        "HomeSafe",
        "HomeGuard",
        "https://www.homeguard.com/policy101",
    ],
    [
        "POL456",
        "HealthPlus",
        "HealthCorp",
        "https://www.healthcorp.com/policy456",
    ],
];

/// # Errors
/// Only if a sample record fails validation.
pub fn sample_address_book() -> Result<AddressBook> {
    let persons = SAMPLE_PERSONS
        .iter()
        .map(|sample| {
            Ok(Person::new(
                Name::parse(sample.name)?,
                Phone::parse(sample.phone)?,
                Email::parse(sample.email)?,
                Address::parse(sample.address)?,
                Birthday::parse(sample.birthday)?,
                sample
                    .tags
                    .iter()
                    .map(|tag| Tag::parse(tag))
                    .collect::<Result<_>>()?,
                PremiumList::new(
                    sample
                        .premiums
                        .iter()
                        .map(|premium| Premium::parse(premium))
                        .collect::<Result<_>>()?,
                ),
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    AddressBook::with_persons(persons)
}

/// # Errors
/// Only if a sample record fails validation.
pub fn sample_policy_book() -> Result<PolicyBook> {
    let policies = SAMPLE_POLICIES
        .iter()
        .map(|[number, name, provider, link]| {
            Ok(Policy::new(
                PolicyNumber::parse(number)?,
                PolicyName::parse(name)?,
                ProviderCompany::parse(provider)?,
                PolicyLink::parse(link)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    PolicyBook::with_policies(policies)
}
