//! Category and note constants and validation functions.
//!
//! The validators return [`ValidationError`] so they can be plugged into
//! `#[validate(custom(function = ...))]` on request DTOs and surface as
//! field-level messages.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::error::field_error;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a category name in characters.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// Exact length of a category color, including the leading `#`.
pub const CATEGORY_COLOR_LENGTH: usize = 7;

/// Maximum length of a note title in characters.
pub const MAX_NOTE_TITLE_LENGTH: usize = 255;

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Default categories
// ---------------------------------------------------------------------------

/// A category every new account starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultCategory {
    pub name: &'static str,
    pub color: &'static str,
}

/// Categories seeded for each new account, in creation order.
///
/// The first entry becomes the account's default category for new notes.
pub const DEFAULT_CATEGORIES: [DefaultCategory; 3] = [
    DefaultCategory {
        name: "Random Thoughts",
        color: "#EF9C66",
    },
    DefaultCategory {
        name: "School",
        color: "#FCDC94",
    },
    DefaultCategory {
        name: "Personal",
        color: "#C8CFA0",
    },
];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a category name: non-blank and within the length limit.
pub fn validate_category_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(field_error("This field may not be blank."));
    }
    if name.chars().count() > MAX_CATEGORY_NAME_LENGTH {
        return Err(field_error(format!(
            "Ensure this field has no more than {MAX_CATEGORY_NAME_LENGTH} characters."
        )));
    }
    Ok(())
}

/// Validate a category color: `#` followed by six hex digits.
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if HEX_COLOR_RE.is_match(color) {
        Ok(())
    } else {
        Err(field_error(format!(
            "Enter a {CATEGORY_COLOR_LENGTH}-character hex color such as #EF9C66."
        )))
    }
}

/// Validate a note title length. Empty titles are allowed.
pub fn validate_note_title(title: &str) -> Result<(), ValidationError> {
    if title.chars().count() > MAX_NOTE_TITLE_LENGTH {
        return Err(field_error(format!(
            "Ensure this field has no more than {MAX_NOTE_TITLE_LENGTH} characters."
        )));
    }
    Ok(())
}
