//! Field validators for the combined login/signup form
//!
//! Each validator is a pure function from a candidate value (plus an
//! auxiliary value where the rule needs one) to `Ok(())` or a
//! user-facing error message. Validators never touch storage; the
//! duplicate-email rule takes the already-loaded records as input.

use regex::Regex;

use crate::domain::UserRecord;

/// Profile name: non-empty after trimming, at least 2 characters
pub fn validate_name(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Enter a name for your profile.".to_string());
    }
    if trimmed.chars().count() < 2 {
        return Err("Name must be at least 2 characters.".to_string());
    }
    Ok(())
}

/// Email or username: a simple `local@domain.tld` shape, or a bare
/// username of word characters with length >= 3.
///
/// When `existing` is given (signup mode), a value already registered
/// under any casing is rejected as well.
pub fn validate_email(value: &str, existing: Option<&[UserRecord]>) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Please enter your Stagepass username or email address.".to_string());
    }

    let email_re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    let username_re = Regex::new(r"^[a-zA-Z0-9_]{3,}$").unwrap();
    if !email_re.is_match(value) && !username_re.is_match(value) {
        return Err("Please enter a valid email or username.".to_string());
    }

    if let Some(users) = existing {
        if users.iter().any(|u| u.matches_email(value)) {
            return Err("This email is already registered. Please login instead.".to_string());
        }
    }

    Ok(())
}

/// Password: non-empty, length >= 8, and at least one lowercase letter,
/// one uppercase letter, and one digit. The first failing rule wins.
pub fn validate_password(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Please enter your password.".to_string());
    }
    if value.chars().count() < 8 {
        return Err("Password must be at least 8 characters.".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password needs a lowercase letter.".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password needs an uppercase letter.".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password needs a number.".to_string());
    }
    Ok(())
}

/// Confirm password: non-empty and exactly equal to the password value
pub fn validate_confirm(value: &str, password: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Please confirm your password.".to_string());
    }
    if value != password {
        return Err("Passwords don't match.".to_string());
    }
    Ok(())
}

/// Terms checkbox: must be accepted
pub fn validate_terms(checked: bool) -> Result<(), String> {
    if !checked {
        return Err("Please accept the terms to continue.".to_string());
    }
    Ok(())
}
