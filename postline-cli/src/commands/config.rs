//! Config command - view and change settings

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use postline_core::config::{Config, StoreBackend};
use postline_core::presenters::TimeDisplay;

use super::get_data_dir;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Choose where messages and users are stored
    SetStore {
        /// memory or file
        backend: StoreBackend,
    },
    /// Set the strftime pattern used to display times
    SetTimeFormat {
        /// e.g. "%H:%M" or "%d.%m.%Y %H:%M"
        format: String,
    },
    /// Set the UTC offset (in minutes) used to display times
    SetUtcOffset {
        #[arg(allow_hyphen_values = true)]
        minutes: i32,
    },
}

pub fn run(command: ConfigCommands) -> Result<()> {
    let data_dir = get_data_dir()?;
    let mut config = Config::load(&data_dir)?;

    match command {
        ConfigCommands::Show { json } => {
            if json {
                let value = serde_json::json!({
                    "dataDir": data_dir,
                    "store": config.store,
                    "timeFormat": config.time_format,
                    "utcOffsetMinutes": config.utc_offset_minutes,
                    "logLevel": config.log_level,
                    "requestTimeoutMs": config.request_timeout_ms,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.add_row(vec!["Data directory", &data_dir.display().to_string()]);
            table.add_row(vec!["Store", &config.store.to_string()]);
            table.add_row(vec!["Time format", &config.time_format]);
            table.add_row(vec!["UTC offset (min)", &config.utc_offset_minutes.to_string()]);
            table.add_row(vec!["Log level", &config.log_level]);
            table.add_row(vec!["Request timeout (ms)", &config.request_timeout_ms.to_string()]);
            println!("{}", table);
            return Ok(());
        }
        ConfigCommands::SetStore { backend } => {
            config.store = backend;
        }
        ConfigCommands::SetTimeFormat { format } => {
            TimeDisplay::new(&format, config.utc_offset_minutes)?;
            config.time_format = format;
        }
        ConfigCommands::SetUtcOffset { minutes } => {
            TimeDisplay::new(&config.time_format, minutes)?;
            config.utc_offset_minutes = minutes;
        }
    }

    config.save(&data_dir)?;
    println!("{}", "Settings saved".green());
    Ok(())
}
