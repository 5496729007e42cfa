//! Demo data - sample accounts for demo mode

use crate::domain::UserRecord;

/// Sample accounts seeded into the demo storage area.
///
/// Passwords satisfy the signup rules so the accounts can also be
/// recreated through the form.
pub fn generate_demo_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new("Demo Listener", "demo@stagepass.app", "Demo1234"),
        UserRecord::new("Sam Vega", "sam.vega@stagepass.app", "Backstage7"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_password;

    #[test]
    fn test_demo_passwords_pass_signup_rules() {
        for user in generate_demo_users() {
            assert!(validate_password(&user.password).is_ok(), "{}", user.email);
        }
    }
}
