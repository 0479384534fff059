//! Note model and DTOs.

use jotter_core::error::field_error;
use jotter_core::notes::validate_note_title;
use jotter_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

use super::{deserialize_blank_as_none, deserialize_present};

const NULL_FIELD: &str = "This field may not be null.";

/// A row from the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: DbId,
    pub account_id: DbId,
    pub category_id: Option<DbId>,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Read shape of a note, with its category's name and color denormalized.
///
/// `category_name` and `category_color` are `None` when the note has no
/// category (never assigned, or the category was deleted).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NoteDetail {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: Option<DbId>,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Write shape for creating and updating notes.
///
/// Every field distinguishes absent (`None`) from explicit `null`
/// (`Some(None)`). Absent fields are left unchanged on update and default
/// to empty on create. `title` and `content` may not be null; `category`
/// may, which clears it.
#[derive(Debug, Default, Deserialize)]
pub struct NoteInput {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub category: Option<Option<DbId>>,
}

impl NoteInput {
    /// The supplied title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().and_then(|t| t.as_deref())
    }

    /// The supplied content, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_ref().and_then(|c| c.as_deref())
    }
}

impl Validate for NoteInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &self.title {
            Some(None) => errors.add("title", field_error(NULL_FIELD)),
            Some(Some(title)) => {
                if let Err(e) = validate_note_title(title) {
                    errors.add("title", e);
                }
            }
            None => {}
        }
        if let Some(None) = self.content {
            errors.add("content", field_error(NULL_FIELD));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Query parameters for listing notes (`?category=`).
///
/// An empty `category` means no filter.
#[derive(Debug, Default, Deserialize)]
pub struct NoteListParams {
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub category: Option<DbId>,
}
