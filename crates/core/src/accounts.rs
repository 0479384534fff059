//! Account identity rules: email normalization and password strength.

use validator::{ValidateEmail, ValidationError};

use crate::error::field_error;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Normalize an email address for storage and lookup.
///
/// Surrounding whitespace is trimmed and the whole address is lower-cased,
/// so `Test@EXAMPLE.COM` and `test@example.com` name the same account.
/// Blank addresses and addresses that are not well-formed are rejected.
pub fn normalize_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(field_error("This field may not be blank."));
    }
    if !email.validate_email() {
        return Err(field_error("Enter a valid email address."));
    }
    Ok(email)
}

/// Validate that a password meets minimum strength requirements.
///
/// Currently enforces a minimum character length. Returns `Ok(())` when the
/// password is acceptable, or `Err` with a human-readable explanation.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    if password.chars().count() < min_length {
        return Err(format!(
            "Ensure this field has at least {min_length} characters."
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_lowercased() {
        let email = normalize_email("test@EXAMPLE.COM").unwrap();
        assert_eq!(email, "test@example.com");
    }

    #[test]
    fn email_whitespace_is_trimmed() {
        let email = normalize_email("  Someone@Example.com \n").unwrap();
        assert_eq!(email, "someone@example.com");
    }

    #[test]
    fn blank_email_is_rejected() {
        assert!(normalize_email("").is_err());
        assert!(normalize_email("   ").is_err());
    }

    #[test]
    fn malformed_email_is_rejected() {
        for raw in ["not-an-email", "missing@", "@example.com", "two@@example.com"] {
            let err = normalize_email(raw).unwrap_err();
            assert_eq!(
                err.message.as_deref(),
                Some("Enter a valid email address."),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn short_password_is_rejected() {
        let msg = validate_password_strength("short", MIN_PASSWORD_LENGTH).unwrap_err();
        assert!(msg.contains("at least 8 characters"));
    }

    #[test]
    fn password_at_minimum_passes() {
        assert!(validate_password_strength("12345678", MIN_PASSWORD_LENGTH).is_ok());
        assert!(validate_password_strength("testpass123", MIN_PASSWORD_LENGTH).is_ok());
    }
}
