//! Auth form controller
//!
//! The combined login/signup form as an explicit state object: mode,
//! password visibility, current input values, and the field error map.
//! Event handlers become methods, so the whole flow is testable without
//! any UI attached.
//!
//! Submission semantics: every applicable field is validated and all
//! failures are reported together; credential and storage failures
//! surface as errors on the email field; a successful signup
//! auto-switches to login mode with the email pre-filled.

use std::sync::Arc;

use crate::domain::{Field, FieldErrors, FormFields, FormMode, SessionRecord};
use crate::ports::UserStore;
use crate::services::auth::AuthService;
use crate::validate;

/// Success message shown after a login, before the dashboard takes over
pub const LOGIN_SUCCESS_MESSAGE: &str = "Welcome back! Redirecting to your music...";
/// Success message shown after a signup, before switching to login mode
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created successfully! You can now log in.";

/// Result of one form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation or auth failed; the field error map holds the details
    Rejected,
    /// Credentials checked out and the session record was written
    LoggedIn(SessionRecord),
    /// Account created; the form switched to login mode with the email
    /// pre-filled
    SignedUp { email: String },
}

/// The combined login/signup form
pub struct AuthForm {
    mode: FormMode,
    show_password: bool,
    fields: FormFields,
    errors: FieldErrors,
    users: Arc<dyn UserStore>,
    auth: AuthService,
}

impl AuthForm {
    /// A fresh form: login mode, password hidden, everything empty
    pub fn new(users: Arc<dyn UserStore>, auth: AuthService) -> Self {
        Self {
            mode: FormMode::Login,
            show_password: false,
            fields: FormFields::default(),
            errors: FieldErrors::new(),
            users,
            auth,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    // Setters clear that field's error, the clear-on-input behavior.

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.fields.name = value.into();
        self.errors.clear_field(Field::Name);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.fields.email = value.into();
        self.errors.clear_field(Field::Email);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.fields.password = value.into();
        self.errors.clear_field(Field::Password);
    }

    pub fn set_confirm(&mut self, value: impl Into<String>) {
        self.fields.confirm = value.into();
        self.errors.clear_field(Field::Confirm);
    }

    pub fn set_terms_accepted(&mut self, checked: bool) {
        self.fields.terms_accepted = checked;
        self.errors.clear_field(Field::Terms);
    }

    /// Flip between showing and masking the password fields
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Switch between login and signup, clearing errors and input values
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.errors.clear();
        self.fields = FormFields::default();
    }

    /// Validate every applicable field; returns true when all pass.
    ///
    /// Name, confirm, and terms apply in signup mode only; email and
    /// password always. All failing fields are reported at once.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        if self.mode.is_signup() {
            if let Err(msg) = validate::validate_name(&self.fields.name) {
                self.errors.set(Field::Name, msg);
            }
        }

        // The duplicate-email rule only applies when registering
        let existing = if self.mode.is_signup() {
            Some(self.users.list())
        } else {
            None
        };
        if let Err(msg) = validate::validate_email(&self.fields.email, existing.as_deref()) {
            self.errors.set(Field::Email, msg);
        }

        if let Err(msg) = validate::validate_password(&self.fields.password) {
            self.errors.set(Field::Password, msg);
        }

        if self.mode.is_signup() {
            if let Err(msg) =
                validate::validate_confirm(&self.fields.confirm, &self.fields.password)
            {
                self.errors.set(Field::Confirm, msg);
            }
            if let Err(msg) = validate::validate_terms(self.fields.terms_accepted) {
                self.errors.set(Field::Terms, msg);
            }
        }

        self.errors.is_empty()
    }

    /// Submit the form in its current mode.
    ///
    /// Never returns an `Err`: every failure lands in the field error map
    /// and the form stays recoverable.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.validate() {
            return SubmitOutcome::Rejected;
        }

        match self.mode {
            FormMode::Login => {
                match self.auth.login(&self.fields.email, &self.fields.password) {
                    Ok(session) => {
                        self.clear_after_submit();
                        SubmitOutcome::LoggedIn(session)
                    }
                    Err(e) => {
                        // Unknown account, wrong password, and a failed
                        // session write all land on the email field
                        self.errors.set(Field::Email, e.to_string());
                        SubmitOutcome::Rejected
                    }
                }
            }
            FormMode::Signup => {
                let email = self.fields.email.clone();
                match self
                    .auth
                    .signup(&self.fields.name, &email, &self.fields.password)
                {
                    Ok(_) => {
                        // Auto-switch to login with the email pre-filled
                        self.toggle_mode();
                        self.fields.email = email.clone();
                        SubmitOutcome::SignedUp { email }
                    }
                    Err(e) => {
                        self.errors.set(Field::Email, e.to_string());
                        SubmitOutcome::Rejected
                    }
                }
            }
        }
    }

    /// Post-submit cleanup: clears everything except, in login mode, the
    /// email value (kept for retry and for the post-signup pre-fill)
    fn clear_after_submit(&mut self) {
        let email = self.fields.email.clone();
        self.fields = FormFields::default();
        if self.mode == FormMode::Login {
            self.fields.email = email;
        }
    }
}
