//! User command - create and inspect users

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;

use super::{call, get_context, parse_id, print_json, CliError};
use crate::output;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all users
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one user
    Show {
        /// User ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: UserCommands) -> Result<()> {
    match command {
        UserCommands::Create { name, email, json } => run_create(&name, &email, json).await,
        UserCommands::List { json } => run_list(json).await,
        UserCommands::Show { id, json } => run_show(&id, json).await,
    }
}

async fn run_create(name: &str, email: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let result = call(&ctx, json, ctx.create_user.execute(name, email)).await?;

    if json {
        return print_json(result.map(|u| ctx.user_presenter.present(&u)));
    }

    let user = result.context("Failed to create user")?;
    let vm = ctx.user_presenter.present(&user);
    println!("{} Created user {} ({})", "✓".green(), vm.name.bold(), vm.id);
    Ok(())
}

async fn run_list(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let result = call(&ctx, json, ctx.user_query.list()).await?;

    if json {
        return print_json(result.map(|all| ctx.user_presenter.present_all(&all)));
    }

    let users = result.context("Failed to list users")?;
    if users.is_empty() {
        output::info("No users yet. Create one with 'pl user create'.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Name", "Email", "Member since", "ID"]);
    for vm in ctx.user_presenter.present_all(&users) {
        table.add_row(vec![vm.name, vm.email, vm.member_since, vm.id]);
    }
    println!("{}", table);
    Ok(())
}

async fn run_show(id: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let ctx = get_context()?;
    let result = call(&ctx, json, ctx.user_query.find(&id)).await?;

    if json {
        let found = result.map(|u| u.map(|u| ctx.user_presenter.present(&u)));
        let missing = matches!(found, Ok(None));
        print_json(found)?;
        if missing {
            return Err(CliError::NotFound { kind: "user", id: id.to_string() }.into());
        }
        return Ok(());
    }

    let user = result
        .context("Failed to look up user")?
        .ok_or_else(|| CliError::NotFound { kind: "user", id: id.to_string() })?;
    let vm = ctx.user_presenter.present(&user);

    println!("{}", vm.name.bold());
    println!("Email: {}", vm.email);
    println!("Member since: {}", vm.member_since);
    println!("ID: {}", vm.id);
    Ok(())
}
