use clientele_core::model::person::{
    Address, Birthday, Email, Name, Phone, Premium, PremiumList, Tag,
};
use clientele_core::model::{EntityKind, Person};
use clientele_core::ExError;
use serde::{Deserialize, Serialize};

use crate::errors::{data_loading, missing_field, Result};

/// A premium as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedPremium {
    pub policy_name: String,
    pub amount: u64,
}

/// A person as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JsonAdaptedPerson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub premiums: Vec<JsonAdaptedPremium>,
}

impl From<&Person> for JsonAdaptedPerson {
    fn from(person: &Person) -> Self {
        Self {
            name: Some(person.name.as_str().to_string()),
            phone: Some(person.phone.as_str().to_string()),
            email: Some(person.email.as_str().to_string()),
            address: Some(person.address.as_str().to_string()),
            birthday: Some(person.birthday.to_string()),
            tags: person.tags.iter().map(|tag| tag.as_str().to_string()).collect(),
            premiums: person
                .premiums
                .iter()
                .map(|premium| JsonAdaptedPremium {
                    policy_name: premium.policy_name().as_str().to_string(),
                    amount: premium.amount(),
                })
                .collect(),
        }
    }
}

impl JsonAdaptedPerson {
    /// Validate every field and build the model person
    ///
    /// # Errors
    /// `DataLoading` naming the missing or invalid field.
    pub fn to_model(&self) -> Result<Person> {
        let invalid = |err| data_loading(EntityKind::Person, err);

        let name = Name::parse(required(&self.name, "name")?).map_err(invalid)?;
        let phone = Phone::parse(required(&self.phone, "phone")?).map_err(invalid)?;
        let email = Email::parse(required(&self.email, "email")?).map_err(invalid)?;
        let address = Address::parse(required(&self.address, "address")?).map_err(invalid)?;
        let birthday = Birthday::parse(required(&self.birthday, "birthday")?).map_err(invalid)?;
        let tags = self
            .tags
            .iter()
            .map(|tag| Tag::parse(tag))
            .collect::<clientele_core::Result<_>>()
            .map_err(invalid)?;
        let premiums = self
            .premiums
            .iter()
            .map(|premium| Premium::parse(&format!("{} {}", premium.policy_name, premium.amount)))
            .collect::<clientele_core::Result<Vec<_>>>()
            .map_err(invalid)?;

        Ok(Person::new(
            name,
            phone,
            email,
            address,
            birthday,
            tags,
            PremiumList::new(premiums),
        ))
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> std::result::Result<&'a str, ExError> {
    value
        .as_deref()
        .ok_or_else(|| missing_field(EntityKind::Person, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientele_core::ExErrorKind;

    fn amy() -> JsonAdaptedPerson {
        JsonAdaptedPerson {
            name: Some("Amy Bee".to_string()),
            phone: Some("11111111".to_string()),
            email: Some("amy@example.com".to_string()),
            address: Some("Block 312, Amy Street 1".to_string()),
            birthday: Some("2002-02-09".to_string()),
            tags: vec!["friend".to_string()],
            premiums: vec![JsonAdaptedPremium {
                policy_name: "LifeShield".to_string(),
                amount: 100,
            }],
        }
    }

    #[test]
    fn test_valid_person_converts_back_unchanged() {
        let person = amy().to_model().unwrap();
        assert_eq!(JsonAdaptedPerson::from(&person), amy());
    }

    #[test]
    fn test_invalid_phone_names_field() {
        let mut record = amy();
        record.phone = Some("+651234".to_string());
        let err = record.to_model().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::DataLoading);
        assert_eq!(err.field(), Some("phone"));
    }

    #[test]
    fn test_missing_email() {
        let mut record = amy();
        record.email = None;
        let err = record.to_model().unwrap_err();
        assert_eq!(err.message(), "Person's email field is missing!");
    }

    #[test]
    fn test_invalid_tag() {
        let mut record = amy();
        record.tags.push("#friend".to_string());
        assert_eq!(record.to_model().unwrap_err().field(), Some("tag"));
    }
}
