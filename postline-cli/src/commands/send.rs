//! Send command - post a message

use std::io::{self, Read};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{call, get_context, print_json};

pub async fn run(content: Option<String>, sender: &str, json: bool) -> Result<()> {
    // Get content from argument or stdin
    let content = match content {
        Some(content) => content,
        None if atty::isnt(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read message from stdin")?;
            buffer.trim_end_matches(['\r', '\n']).to_string()
        }
        None => anyhow::bail!("No message provided. Pass it as an argument or pipe it from stdin."),
    };

    let ctx = get_context()?;
    let result = call(&ctx, json, ctx.send_message.execute(&content, sender)).await?;

    if json {
        return print_json(result.map(|m| ctx.message_presenter.present(&m)));
    }

    let message = result.context("Failed to send message")?;
    let vm = ctx.message_presenter.present(&message);
    println!("{} Sent {} at {}", "✓".green(), vm.id.dimmed(), vm.display_time);
    Ok(())
}
