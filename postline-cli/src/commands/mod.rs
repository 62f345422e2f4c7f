//! CLI command implementations
//!
//! Commands are the delivery adapter: they turn arguments into use case
//! calls and use case results into terminal output and exit codes.

pub mod config;
pub mod demo;
pub mod messages;
pub mod send;
pub mod status;
pub mod user;

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use thiserror::Error;

use postline_core::config::Config;
use postline_core::{logging, EntityId, OperationResult, PostlineContext};

/// Failures that only exist at the CLI boundary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Timed out after {0}ms waiting for storage")]
    Timeout(u64),
}

/// Map an error to the process exit code
///
/// 2 validation, 3 persistence, 4 not found, 5 timeout, 1 anything else.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return match cli {
            CliError::NotFound { .. } => 4,
            CliError::Timeout(_) => 5,
        };
    }
    match err.downcast_ref::<postline_core::Error>() {
        Some(postline_core::Error::Validation { .. }) => 2,
        Some(postline_core::Error::Persistence(_)) => 3,
        _ => 1,
    }
}

/// Get the data directory from environment or default
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("POSTLINE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".postline"))
}

/// Install logging, then build the context
pub fn get_context() -> Result<PostlineContext> {
    let data_dir = get_data_dir()?;

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    let config = Config::load(&data_dir).context("Failed to load settings")?;
    logging::init(&config.log_level);

    // Loaded again now that a subscriber is installed, so settings warnings are reported
    let ctx = PostlineContext::new(&data_dir).context("Failed to initialize postline context")?;
    tracing::debug!(dir = %data_dir.display(), store = %ctx.config.store, "Context ready");
    Ok(ctx)
}

/// Run a use case with the configured request timeout
///
/// On timeout the use case future is dropped, but blocking file work it
/// already started is not cancelled: a save may still land after the CLI
/// has reported the timeout. With `json` the timeout is also printed as a
/// failed envelope.
pub async fn call<T, F>(
    ctx: &PostlineContext,
    json: bool,
    fut: F,
) -> Result<postline_core::domain::result::Result<T>>
where
    F: Future<Output = postline_core::domain::result::Result<T>>,
{
    let timeout_ms = ctx.config.request_timeout_ms;
    match tokio::time::timeout(Duration::from_millis(timeout_ms), fut).await {
        Ok(result) => Ok(result),
        Err(_) => {
            let err = CliError::Timeout(timeout_ms);
            if json {
                println!("{}", serde_json::to_string_pretty(&timeout_envelope(&err))?);
            }
            Err(err.into())
        }
    }
}

/// JSON envelope for a request that timed out
fn timeout_envelope(err: &CliError) -> OperationResult<()> {
    let mut context = HashMap::new();
    context.insert("kind".to_string(), serde_json::Value::from("timeout"));
    OperationResult::fail_with_context(err.to_string(), context)
}

/// Print a use case outcome as a JSON envelope
///
/// Errors are printed inside the envelope and then returned, so the exit
/// code still reflects the failure.
pub fn print_json<T: Serialize>(result: postline_core::domain::result::Result<T>) -> Result<()> {
    match result {
        Ok(data) => {
            println!("{}", serde_json::to_string_pretty(&OperationResult::ok(data))?);
            Ok(())
        }
        Err(e) => {
            let envelope: OperationResult<T> = OperationResult::from_error(&e);
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            Err(e.into())
        }
    }
}

/// Parse a user-supplied id
pub fn parse_id(raw: &str) -> Result<EntityId> {
    EntityId::new(raw.trim()).context("Invalid id")
}

#[cfg(test)]
mod tests {
    use super::*;
    use postline_core::StorageError;

    #[test]
    fn test_exit_codes() {
        let validation: anyhow::Error = postline_core::Error::validation("message", vec!["content"]).into();
        assert_eq!(exit_code(&validation), 2);

        let persistence: anyhow::Error =
            postline_core::Error::from(StorageError::unavailable("offline")).into();
        assert_eq!(exit_code(&persistence.context("Failed to send message")), 3);

        let missing: anyhow::Error = CliError::NotFound { kind: "message", id: "x".into() }.into();
        assert_eq!(exit_code(&missing), 4);
        assert_eq!(exit_code(&CliError::Timeout(10).into()), 5);
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
    }

    #[tokio::test]
    async fn test_call_times_out() {
        let mut ctx = PostlineContext::in_memory().unwrap();
        ctx.config.request_timeout_ms = 1;

        let err = call(&ctx, true, std::future::pending::<postline_core::domain::result::Result<()>>())
            .await
            .unwrap_err();
        assert_eq!(exit_code(&err), 5);
    }

    #[tokio::test]
    async fn test_call_passes_result_through() {
        let ctx = PostlineContext::in_memory().unwrap();
        let sent = call(&ctx, false, ctx.send_message.execute("hello", "Alice"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(sent.content(), "hello");
    }

    #[test]
    fn test_timeout_envelope() {
        let envelope = timeout_envelope(&CliError::Timeout(250));
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["context"]["kind"], "timeout");
        assert_eq!(json["error"], "Timed out after 250ms waiting for storage");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(" msg-1 ").unwrap().as_str(), "msg-1");
        assert!(parse_id("   ").is_err());
    }
}
