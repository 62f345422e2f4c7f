//! Messages command - read the conversation

use anyhow::{Context, Result};
use colored::Colorize;

use super::{call, get_context, parse_id, print_json, CliError};
use crate::output;

pub async fn run_list(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let result = call(&ctx, json, ctx.message_query.list()).await?;

    if json {
        return print_json(result.map(|all| ctx.message_presenter.present_all(&all)));
    }

    let messages = result.context("Failed to list messages")?;
    if messages.is_empty() {
        output::info("No messages yet. Send one with 'pl send'.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Time", "Sender", "Message", "ID"]);
    for vm in ctx.message_presenter.present_all(&messages) {
        table.add_row(vec![vm.display_time, vm.sender, vm.content, vm.id]);
    }

    println!("{}", table);
    println!();
    println!("{} message(s)", messages.len());
    Ok(())
}

pub async fn run_show(id: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let ctx = get_context()?;
    let result = call(&ctx, json, ctx.message_query.find(&id)).await?;

    if json {
        // A missing message is reported as `data: null` plus the not-found exit code
        let found = result.map(|m| m.map(|m| ctx.message_presenter.present(&m)));
        let missing = matches!(found, Ok(None));
        print_json(found)?;
        if missing {
            return Err(CliError::NotFound { kind: "message", id: id.to_string() }.into());
        }
        return Ok(());
    }

    let message = result
        .context("Failed to look up message")?
        .ok_or_else(|| CliError::NotFound { kind: "message", id: id.to_string() })?;
    let vm = ctx.message_presenter.present(&message);

    println!("{} {}", vm.sender.bold(), vm.display_time.dimmed());
    println!("{}", vm.content);
    println!();
    println!("ID: {}", vm.id);
    println!("Created: {}", vm.created_at);
    Ok(())
}
