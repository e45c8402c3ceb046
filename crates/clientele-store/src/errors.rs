//! Error handling for clientele-store
//!
//! Wraps clientele-core ExError with store-specific helpers

use std::path::Path;

use clientele_core::errors::{ClienteleError, ExError, ExErrorKind};
use clientele_core::model::EntityKind;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(format!("{}: {}", path.display(), err))
}

/// Create a JSON encoding/decoding error
pub fn serialization_error(operation: &str, path: &Path, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(format!("{}: {}", path.display(), err))
}

/// Create an error for a stored record that is missing a field
pub fn missing_field(entity: EntityKind, field: &str) -> ExError {
    ExError::new(ExErrorKind::DataLoading)
        .with_op("load")
        .with_entity(entity)
        .with_field(field)
        .with_message(format!("{}'s {} field is missing!", capitalised(entity), field))
}

/// Create an error for a stored book holding two records with one identity
pub fn duplicate_records(entity: EntityKind) -> ExError {
    ExError::new(ExErrorKind::DataLoading)
        .with_op("load")
        .with_entity(entity)
        .with_message(format!(
            "The {} contains duplicate {} records",
            entity.container(),
            entity
        ))
}

/// Convert a model validation failure raised while loading into a
/// `DataLoading` error that keeps the field and constraint message
pub fn data_loading(entity: EntityKind, err: ClienteleError) -> ExError {
    let ex: ExError = err.into();
    let mut loading = ExError::new(ExErrorKind::DataLoading)
        .with_op("load")
        .with_entity(entity)
        .with_message(ex.message().to_string());
    if let Some(field) = ex.field() {
        loading = loading.with_field(field);
    }
    loading
}

/// Create a config error
pub fn config_error(path: &Path, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("load_config")
        .with_message(format!("{}: {}", path.display(), reason))
}

fn capitalised(entity: EntityKind) -> String {
    let label = entity.to_string();
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = missing_field(EntityKind::Person, "phone");
        assert_eq!(err.kind(), ExErrorKind::DataLoading);
        assert_eq!(err.message(), "Person's phone field is missing!");
        assert_eq!(err.field(), Some("phone"));
    }

    #[test]
    fn test_data_loading_keeps_field() {
        let err = data_loading(
            EntityKind::Policy,
            ClienteleError::InvalidField {
                field: "policy_link",
                reason: "bad link",
            },
        );
        assert_eq!(err.kind(), ExErrorKind::DataLoading);
        assert_eq!(err.field(), Some("policy_link"));
        assert_eq!(err.entity(), Some(EntityKind::Policy));
        assert_eq!(err.message(), "bad link");
    }
}
