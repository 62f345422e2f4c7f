//! Postline CLI - send and read messages from your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{config, demo, messages, send, status, user};

/// Postline - a tiny message board in your terminal
#[derive(Parser)]
#[command(name = "pl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a message
    Send {
        /// Message text (read from stdin if omitted)
        content: Option<String>,
        /// Who is sending the message
        #[arg(long, short, env = "POSTLINE_SENDER")]
        sender: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all messages
    Messages {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one message
    Message {
        /// Message ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        command: user::UserCommands,
    },

    /// Show store summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Seed a sample conversation
    Demo,

    /// View and change settings
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::from(commands::exit_code(&e))
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Send { content, sender, json } => send::run(content, &sender, json).await,
        Commands::Messages { json } => messages::run_list(json).await,
        Commands::Message { id, json } => messages::run_show(&id, json).await,
        Commands::User { command } => user::run(command).await,
        Commands::Status { json } => status::run(json).await,
        Commands::Demo => demo::run().await,
        Commands::Config { command } => config::run(command),
    }
}
