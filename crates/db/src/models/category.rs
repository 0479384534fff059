//! Category model and DTOs.

use jotter_core::error::{field_error, CoreError};
use jotter_core::notes::{validate_category_name, validate_hex_color};
use jotter_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: DbId,
    pub account_id: DbId,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// API shape of a category, with its note count computed at read time.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CategorySummary {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub notes_count: i64,
}

impl CategorySummary {
    /// Summary of a category that was just created and has no notes yet.
    pub fn new_empty(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            color: category.color,
            notes_count: 0,
        }
    }
}

/// Request body for creating or updating a category.
///
/// Both fields are optional at the wire level so that partial updates can
/// reuse this shape; [`CategoryInput::into_create`] enforces that full
/// writes supply both.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CategoryInput {
    #[validate(custom(function = "validate_category_name"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,
}

/// DTO for inserting a category. Owner comes from the scope, never the payload.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    pub color: String,
}

impl From<CreateCategory> for CategoryInput {
    fn from(full: CreateCategory) -> Self {
        Self {
            name: Some(full.name),
            color: Some(full.color),
        }
    }
}

impl CategoryInput {
    /// Validate a full write (create or PUT): every field must be present.
    pub fn into_create(self) -> Result<CreateCategory, CoreError> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if self.name.is_none() {
            errors.add("name", field_error("This field is required."));
        }
        if self.color.is_none() {
            errors.add("color", field_error("This field is required."));
        }
        match (self.name, self.color) {
            (Some(name), Some(color)) if errors.is_empty() => Ok(CreateCategory { name, color }),
            _ => Err(CoreError::InvalidFields(errors)),
        }
    }

    /// Validate a partial write (PATCH): only supplied fields are checked.
    pub fn validated(self) -> Result<Self, CoreError> {
        self.validate().map_err(CoreError::InvalidFields)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn input(json: serde_json::Value) -> CategoryInput {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn full_write_requires_both_fields() {
        let err = input(serde_json::json!({ "name": "Work" }))
            .into_create()
            .unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(ref errors) => {
            let fields = errors.field_errors();
            assert!(fields.contains_key("color"));
            assert!(!fields.contains_key("name"));
        });
    }

    #[test]
    fn full_write_reports_invalid_color() {
        let err = input(serde_json::json!({ "name": "Work", "color": "blue" }))
            .into_create()
            .unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(ref errors) => {
            assert!(errors.field_errors().contains_key("color"));
        });
    }

    #[test]
    fn full_write_accepts_valid_input() {
        let create = input(serde_json::json!({ "name": "Work", "color": "#EF9C66" }))
            .into_create()
            .unwrap();
        assert_eq!(create.name, "Work");
        assert_eq!(create.color, "#EF9C66");
    }

    #[test]
    fn partial_write_checks_only_supplied_fields() {
        assert!(input(serde_json::json!({ "color": "#FCDC94" })).validated().is_ok());
        assert!(input(serde_json::json!({})).validated().is_ok());
        assert!(input(serde_json::json!({ "name": "" })).validated().is_err());
    }
}
