//! Signup command - create a new account

use anyhow::Result;
use dialoguer::{Confirm, Input, Password};
use stagepass_core::{LogEvent, SubmitOutcome, SIGNUP_SUCCESS_MESSAGE};

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    confirm: Option<String>,
    accept_terms: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let interactive = atty::is(atty::Stream::Stdin);

    let name = match name {
        Some(n) => n,
        None if interactive => Input::new().with_prompt("Profile name").interact_text()?,
        None => anyhow::bail!("--name is required when not running interactively"),
    };
    let email = match email {
        Some(e) => e,
        None if interactive => Input::new()
            .with_prompt("Email or username")
            .interact_text()?,
        None => anyhow::bail!("--email is required when not running interactively"),
    };
    let password = match password {
        Some(p) => p,
        None if interactive => Password::new().with_prompt("Password").interact()?,
        None => anyhow::bail!("--password is required when not running interactively"),
    };
    let confirm = match confirm {
        Some(c) => c,
        None if interactive => Password::new().with_prompt("Confirm password").interact()?,
        None => anyhow::bail!("--confirm is required when not running interactively"),
    };
    let terms_accepted = if accept_terms {
        true
    } else if interactive {
        Confirm::new()
            .with_prompt("Do you accept the terms of use?")
            .default(false)
            .interact()?
    } else {
        false
    };

    let mut form = ctx.auth_form();
    form.toggle_mode(); // the form starts in login mode
    form.set_name(name);
    form.set_email(email);
    form.set_password(password);
    form.set_confirm(confirm);
    form.set_terms_accepted(terms_accepted);

    match form.submit() {
        SubmitOutcome::SignedUp { email } => {
            log_event(
                &logger,
                LogEvent::new("signup_success").with_command("signup"),
            );
            output::success(SIGNUP_SUCCESS_MESSAGE);
            output::redirect_pause("Switching to login...", 2000);
            println!("Log in with: sp login --email {}", email);
            Ok(())
        }
        SubmitOutcome::Rejected => {
            for (field, message) in form.errors().iter() {
                output::error(&format!("{}: {}", field.as_str(), message));
            }
            log_event(
                &logger,
                LogEvent::new("signup_rejected").with_command("signup"),
            );
            std::process::exit(1);
        }
        SubmitOutcome::LoggedIn(_) => unreachable!("signup mode cannot produce a login"),
    }
}
