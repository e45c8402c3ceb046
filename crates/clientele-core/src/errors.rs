use thiserror::Error;

use crate::model::EntityKind;

/// Result type alias using ClienteleError
pub type Result<T> = std::result::Result<T, ClienteleError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in structured logs, in the
/// store and engine layers, and in tests that assert on failures without
/// depending on message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Parsing
    UnknownCommand,
    InvalidFormat,
    InvalidInput,
    InvalidIndex,

    // Model
    NotFound,
    Duplicate,
    ConstraintViolation,

    // Storage
    DataLoading,
    Io,
    Serialization,
    Persistence,
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::UnknownCommand => "ERR_UNKNOWN_COMMAND",
            ExErrorKind::InvalidFormat => "ERR_INVALID_FORMAT",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidIndex => "ERR_INVALID_INDEX",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Duplicate => "ERR_DUPLICATE",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::DataLoading => "ERR_DATA_LOADING",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context
/// needed to explain the failure to a user or in a log line.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<EntityKind>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context
    pub fn with_entity(mut self, entity: EntityKind) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Add field context (e.g. `phone`, `policy_link`)
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity(&self) -> Option<EntityKind> {
        self.entity
    }

    /// Get the field context, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for Clientele
///
/// The `Display` text of every variant is the exact message shown to the
/// user as command feedback.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClienteleError {
    // ===== Parsing Errors =====
    #[error("Unknown command")]
    UnknownCommand { word: String },

    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: String },

    #[error("Multiple values specified for the following single-valued field(s): {prefixes}")]
    DuplicatePrefixes { prefixes: String },

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndexFormat,

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,

    // ===== Validation Errors =====
    /// A field value violates its format constraint
    #[error("{reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    /// Event end precedes its start
    #[error("Event start time must be before end time.")]
    InvalidEventRange,

    /// Edit supplies a time field the task kind does not have
    #[error("Tasks of type {kind} have no {field}/ field.")]
    FieldNotApplicable {
        field: &'static str,
        kind: &'static str,
    },

    // ===== Model Errors =====
    /// Identity already present in the unique list
    #[error("This {} already exists in the {}", .entity, .entity.container())]
    Duplicate { entity: EntityKind },

    /// Target element is not in the unique list
    #[error("The {} does not exist in the {}", .entity, .entity.container())]
    NotFound { entity: EntityKind },

    /// Index outside the displayed (filtered) list
    #[error("The {entity} index provided is invalid")]
    InvalidIndex { entity: EntityKind },
}

/// Conversion from ClienteleError to ExError
impl From<ClienteleError> for ExError {
    fn from(err: ClienteleError) -> Self {
        let message = err.to_string();
        match err {
            ClienteleError::UnknownCommand { word } => ExError::new(ExErrorKind::UnknownCommand)
                .with_op("parse")
                .with_field(word)
                .with_message(message),

            ClienteleError::InvalidCommandFormat { .. }
            | ClienteleError::DuplicatePrefixes { .. }
            | ClienteleError::NothingToEdit => ExError::new(ExErrorKind::InvalidFormat)
                .with_op("parse")
                .with_message(message),

            ClienteleError::InvalidIndexFormat => ExError::new(ExErrorKind::InvalidIndex)
                .with_op("parse")
                .with_message(message),

            ClienteleError::InvalidField { field, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_field(field)
                .with_message(message),

            ClienteleError::InvalidEventRange => ExError::new(ExErrorKind::ConstraintViolation)
                .with_entity(EntityKind::Task)
                .with_message(message),

            ClienteleError::FieldNotApplicable { field, .. } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_entity(EntityKind::Task)
                    .with_field(field)
                    .with_message(message)
            }

            ClienteleError::Duplicate { entity } => ExError::new(ExErrorKind::Duplicate)
                .with_entity(entity)
                .with_message(message),

            ClienteleError::NotFound { entity } => ExError::new(ExErrorKind::NotFound)
                .with_entity(entity)
                .with_message(message),

            ClienteleError::InvalidIndex { entity } => ExError::new(ExErrorKind::InvalidIndex)
                .with_entity(entity)
                .with_message(message),
        }
    }
}
