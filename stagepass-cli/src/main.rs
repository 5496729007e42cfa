//! Stagepass CLI - your music app account, in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{demo, login, logout, logs, signup, status, theme, users};

/// Stagepass - account and dashboard for the music app clone
#[derive(Parser)]
#[command(name = "sp", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Signup {
        /// Profile name
        #[arg(long)]
        name: Option<String>,
        /// Email address or username
        #[arg(long)]
        email: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Confirm password (prompted when omitted)
        #[arg(long)]
        confirm: Option<String>,
        /// Accept the terms without prompting
        #[arg(long)]
        accept_terms: bool,
    },

    /// Log in to your account
    Login {
        /// Email address or username
        #[arg(long)]
        email: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Echo the password while typing instead of masking it
        #[arg(long)]
        show_password: bool,
    },

    /// Log out of the current session
    Logout,

    /// Show the dashboard for the current session
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered accounts
    Users {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        command: Option<theme::ThemeCommands>,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// View application logs
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Signup {
            name,
            email,
            password,
            confirm,
            accept_terms,
        } => signup::run(name, email, password, confirm, accept_terms),
        Commands::Login {
            email,
            password,
            show_password,
        } => login::run(email, password, show_password),
        Commands::Logout => logout::run(),
        Commands::Status { json } => status::run(json),
        Commands::Users { json } => users::run(json),
        Commands::Theme { command } => theme::run(command),
        Commands::Demo { command } => demo::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}
