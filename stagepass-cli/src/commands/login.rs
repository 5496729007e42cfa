//! Login command - authenticate and open the dashboard

use anyhow::Result;
use dialoguer::{Input, Password};
use stagepass_core::{LogEvent, SubmitOutcome, LOGIN_SUCCESS_MESSAGE};

use super::{get_context, get_logger, log_event, status};
use crate::output;

pub fn run(email: Option<String>, password: Option<String>, show_password: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let interactive = atty::is(atty::Stream::Stdin);

    let mut form = ctx.auth_form();
    if show_password {
        form.toggle_password_visibility();
    }

    let email = match email {
        Some(e) => e,
        None if interactive => Input::new()
            .with_prompt("Email or username")
            .interact_text()?,
        None => anyhow::bail!("--email is required when not running interactively"),
    };
    let password = match password {
        Some(p) => p,
        None if interactive => {
            // The visibility toggle: echo instead of masking
            if form.show_password() {
                Input::new().with_prompt("Password").interact_text()?
            } else {
                Password::new().with_prompt("Password").interact()?
            }
        }
        None => anyhow::bail!("--password is required when not running interactively"),
    };

    form.set_email(email);
    form.set_password(password);

    match form.submit() {
        SubmitOutcome::LoggedIn(_) => {
            log_event(&logger, LogEvent::new("login_success").with_command("login"));
            output::success(LOGIN_SUCCESS_MESSAGE);
            output::redirect_pause("Opening your dashboard...", 1500);
            status::show_dashboard(&ctx, false)
        }
        SubmitOutcome::Rejected => {
            for (field, message) in form.errors().iter() {
                output::error(&format!("{}: {}", field.as_str(), message));
            }
            log_event(
                &logger,
                LogEvent::new("login_rejected").with_command("login"),
            );
            std::process::exit(1);
        }
        SubmitOutcome::SignedUp { .. } => unreachable!("login mode cannot produce a signup"),
    }
}
