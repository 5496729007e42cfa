//! Users command - list registered accounts

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use stagepass_core::ports::UserStore;

use super::get_context;
use crate::output;

/// What gets shown per account. Passwords are stored in the record but
/// never leave the store through this command.
#[derive(Debug, Serialize)]
struct UserRow {
    name: String,
    email: String,
    created_at: String,
}

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    let rows: Vec<UserRow> = ctx
        .store
        .list()
        .into_iter()
        .map(|u| UserRow {
            name: u.name,
            email: u.email,
            created_at: u.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No accounts registered yet. Run 'sp signup' to create one.");
        return Ok(());
    }

    println!("{}", "Registered Accounts".bold());
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["Name", "Email", "Created"]);
    for row in &rows {
        table.add_row(vec![&row.name, &row.email, &row.created_at]);
    }
    println!("{}", table);
    println!();
    println!("{} account(s) total", rows.len());

    Ok(())
}
