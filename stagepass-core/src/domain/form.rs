//! Auth form view-state types
//!
//! Pure data for the combined login/signup form. The controller logic
//! lives in `services::form`; these types carry no I/O.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which face the combined form is currently presenting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Login,
    Signup,
}

impl FormMode {
    pub fn toggled(&self) -> Self {
        match self {
            FormMode::Login => FormMode::Signup,
            FormMode::Signup => FormMode::Login,
        }
    }

    /// Whether the signup-only fields (name, confirm, terms) are in play
    pub fn is_signup(&self) -> bool {
        matches!(self, FormMode::Signup)
    }
}

/// The five form fields errors can attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Password,
    Confirm,
    Terms,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::Confirm => "confirm",
            Field::Terms => "terms",
        }
    }
}

/// Field-level validation errors for one submission.
///
/// Every failing field is reported together; a submission either has an
/// empty map (valid) or one message per offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Clear a single field's error (the "input" event behavior)
    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Clear every field error
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Current input values of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub terms_accepted: bool,
}
