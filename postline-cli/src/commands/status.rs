//! Status command - show a summary of the store

use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::{call, get_context, print_json};

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let result = call(&ctx, json, ctx.status_service.get_status()).await?;

    if json {
        return print_json(result);
    }

    let status = result.context("Failed to read status")?;

    println!("{}", "Postline Status".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec!["Store", &ctx.config.store.to_string()]);
    table.add_row(vec!["Messages", &status.total_messages.to_string()]);
    table.add_row(vec!["Users", &status.total_users.to_string()]);

    println!("{}", table);
    println!();

    if let (Some(earliest), Some(latest)) = (&status.date_range.earliest, &status.date_range.latest) {
        println!("Date range: {} to {}", earliest, latest);
        println!();
    }

    if !status.senders.is_empty() {
        println!("{}", "Senders".bold());
        for name in &status.senders {
            println!("  • {}", name);
        }
    }

    Ok(())
}
