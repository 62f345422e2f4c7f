//! Demo command - seed a sample conversation

use anyhow::{Context, Result};
use colored::Colorize;

use postline_core::adapters::demo::{DEMO_CONVERSATION, DEMO_USERS};

use super::{call, get_context};

pub async fn run() -> Result<()> {
    let ctx = get_context()?;

    for (name, email) in DEMO_USERS {
        call(&ctx, false, ctx.create_user.execute(name, email))
            .await?
            .with_context(|| format!("Failed to create demo user {}", name))?;
    }

    for (sender, content) in DEMO_CONVERSATION {
        call(&ctx, false, ctx.send_message.execute(content, sender))
            .await?
            .context("Failed to send demo message")?;
    }

    println!("{}", "Demo conversation added".green());
    println!(
        "{} users and {} messages. Run 'pl messages' to read them.",
        DEMO_USERS.len(),
        DEMO_CONVERSATION.len()
    );
    if ctx.config.store == postline_core::config::StoreBackend::Memory {
        println!("{}", "Note: the memory store is discarded when this command exits.".yellow());
    }
    Ok(())
}
