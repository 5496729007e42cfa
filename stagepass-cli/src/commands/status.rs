//! Status command - the dashboard surface

use anyhow::Result;
use colored::Colorize;
use stagepass_core::StagepassContext;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    show_dashboard(&ctx, json)
}

/// Render the dashboard, or bounce back to the auth surface when no
/// session exists (the only access check in the system)
pub fn show_dashboard(ctx: &StagepassContext, json: bool) -> Result<()> {
    let summary = match ctx.dashboard_service.summary() {
        Ok(summary) => summary,
        Err(_) => {
            output::warning("You are not logged in.");
            println!("Run 'sp login' to open your dashboard.");
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}, {}!", summary.greeting.bold(), summary.name.bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Avatar", &summary.initials]);
    table.add_row(vec!["Email", &summary.email]);
    table.add_row(vec!["Logged in since", &summary.login_time]);
    table.add_row(vec!["Theme", summary.theme.as_str()]);
    table.add_row(vec!["Registered listeners", &summary.total_users.to_string()]);
    println!("{}", table);
    println!();

    output::info("Run 'sp logout' to log out, 'sp theme toggle' to switch themes.");

    Ok(())
}
