//! Theme command - show or change the theme preference

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use stagepass_core::{LogEvent, Theme};

use super::{get_context, get_logger, log_event};

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,
    /// Switch to the light theme
    Light,
    /// Switch to the dark theme
    Dark,
    /// Flip between light and dark
    Toggle,
}

pub fn run(command: Option<ThemeCommands>) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    match command {
        Some(ThemeCommands::Light) => {
            ctx.dashboard_service.set_theme(Theme::Light);
            log_event(&logger, LogEvent::new("theme_changed").with_command("theme"));
            println!("Theme set to {}", "light".bold());
        }
        Some(ThemeCommands::Dark) => {
            ctx.dashboard_service.set_theme(Theme::Dark);
            log_event(&logger, LogEvent::new("theme_changed").with_command("theme"));
            println!("Theme set to {}", "dark".bold());
        }
        Some(ThemeCommands::Toggle) => {
            let next = ctx.dashboard_service.toggle_theme();
            log_event(&logger, LogEvent::new("theme_changed").with_command("theme"));
            println!("Theme switched to {}", next.as_str().bold());
        }
        Some(ThemeCommands::Show) | None => {
            println!("Theme is {}", ctx.dashboard_service.theme().as_str().bold());
        }
    }

    Ok(())
}
