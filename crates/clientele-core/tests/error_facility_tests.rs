use clientele_core::errors::{ClienteleError, ExError, ExErrorKind};
use clientele_core::model::EntityKind;

#[test]
fn test_parse_errors_map_to_format_kinds() {
    let unknown: ExError = ClienteleError::UnknownCommand {
        word: "launch".to_string(),
    }
    .into();
    assert_eq!(unknown.kind(), ExErrorKind::UnknownCommand);
    assert_eq!(unknown.field(), Some("launch"));
    assert_eq!(unknown.op(), Some("parse"));

    let repeated: ExError = ClienteleError::DuplicatePrefixes {
        prefixes: "n/".to_string(),
    }
    .into();
    assert_eq!(repeated.kind(), ExErrorKind::InvalidFormat);
}

#[test]
fn test_model_errors_keep_entity() {
    let duplicate: ExError = ClienteleError::Duplicate {
        entity: EntityKind::Task,
    }
    .into();
    assert_eq!(duplicate.kind(), ExErrorKind::Duplicate);
    assert_eq!(duplicate.entity(), Some(EntityKind::Task));
    assert_eq!(duplicate.code(), "ERR_DUPLICATE");
    assert_eq!(
        duplicate.message(),
        "This task already exists in the task list"
    );

    let index: ExError = ClienteleError::InvalidIndex {
        entity: EntityKind::Person,
    }
    .into();
    assert_eq!(index.kind(), ExErrorKind::InvalidIndex);
    assert_eq!(index.entity(), Some(EntityKind::Person));
}

#[test]
fn test_field_errors_name_the_field() {
    let err: ExError = ClienteleError::InvalidField {
        field: "phone",
        reason: "Phone numbers should only contain numbers",
    }
    .into();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.field(), Some("phone"));
    assert_eq!(err.message(), "Phone numbers should only contain numbers");
}

#[test]
fn test_event_range_is_constraint_violation() {
    let err: ExError = ClienteleError::InvalidEventRange.into();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.code(), "ERR_CONSTRAINT_VIOLATION");
}
