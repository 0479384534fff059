use validator::{ValidationError, ValidationErrors};

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Field-level validation failures, keyed by request field name.
    #[error("Validation failed: {0}")]
    InvalidFields(ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl CoreError {
    /// Build a [`CoreError::InvalidFields`] carrying a single message for one field.
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        Self::from_field(field, field_error(message))
    }

    /// Wrap a single field's [`ValidationError`] as [`CoreError::InvalidFields`].
    pub fn from_field(field: &'static str, error: ValidationError) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, error);
        CoreError::InvalidFields(errors)
    }
}

/// Build a [`ValidationError`] whose message is shown to API clients verbatim.
pub fn field_error(message: impl Into<String>) -> ValidationError {
    let message: String = message.into();
    ValidationError::new("invalid").with_message(message.into())
}
