use clientele_core::model::policy::{PolicyLink, PolicyName, PolicyNumber, ProviderCompany};
use clientele_core::model::{EntityKind, Policy};
use clientele_core::ExError;
use serde::{Deserialize, Serialize};

use crate::errors::{data_loading, missing_field, Result};

/// A policy as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JsonAdaptedPolicy {
    #[serde(default)]
    pub policy_number: Option<String>,
    #[serde(default)]
    pub policy_name: Option<String>,
    #[serde(default)]
    pub provider_company: Option<String>,
    #[serde(default)]
    pub policy_link: Option<String>,
}

impl From<&Policy> for JsonAdaptedPolicy {
    fn from(policy: &Policy) -> Self {
        Self {
            policy_number: Some(policy.policy_number.as_str().to_string()),
            policy_name: Some(policy.policy_name.as_str().to_string()),
            provider_company: Some(policy.provider_company.as_str().to_string()),
            policy_link: Some(policy.policy_link.as_str().to_string()),
        }
    }
}

impl JsonAdaptedPolicy {
    /// # Errors
    /// `DataLoading` naming the missing or invalid field.
    pub fn to_model(&self) -> Result<Policy> {
        let invalid = |err| data_loading(EntityKind::Policy, err);

        Ok(Policy::new(
            PolicyNumber::parse(required(&self.policy_number, "policy_number")?)
                .map_err(invalid)?,
            PolicyName::parse(required(&self.policy_name, "policy_name")?).map_err(invalid)?,
            ProviderCompany::parse(required(&self.provider_company, "provider_company")?)
                .map_err(invalid)?,
            PolicyLink::parse(required(&self.policy_link, "policy_link")?).map_err(invalid)?,
        ))
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> std::result::Result<&'a str, ExError> {
    value
        .as_deref()
        .ok_or_else(|| missing_field(EntityKind::Policy, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientele_core::ExErrorKind;

    fn pol123() -> JsonAdaptedPolicy {
        JsonAdaptedPolicy {
            policy_number: Some("POL123".to_string()),
            policy_name: Some("LifeShield".to_string()),
            provider_company: Some("ShieldCorp".to_string()),
            policy_link: Some("https://www.shieldcorp.com/policy123".to_string()),
        }
    }

    #[test]
    fn test_valid_policy() {
        let policy = pol123().to_model().unwrap();
        assert_eq!(policy.policy_number.as_str(), "POL123");
    }

    #[test]
    fn test_invalid_link() {
        let mut record = pol123();
        record.policy_link = Some("invalid-link".to_string());
        let err = record.to_model().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::DataLoading);
        assert_eq!(err.field(), Some("policy_link"));
    }

    #[test]
    fn test_missing_number() {
        let mut record = pol123();
        record.policy_number = None;
        assert_eq!(
            record.to_model().unwrap_err().message(),
            "Policy's policy_number field is missing!"
        );
    }
}
