//! Result and error types for the core library

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by a repository implementation
///
/// Absence of a record is never a `StorageError`; lookups return `Ok(None)`.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage task failed: {0}")]
    Task(String),

    #[error("storage lock poisoned")]
    Poisoned,
}

impl StorageError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: invalid {entity} {}", .fields.join(", "))]
    Validation {
        entity: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("Persistence error: {0}")]
    Persistence(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a validation error for the given entity kind
    pub fn validation(entity: &'static str, fields: Vec<&'static str>) -> Self {
        Self::Validation { entity, fields }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::Persistence(_) => "persistence",
            Self::Config(_) => "config",
        }
    }

    /// Field names carried by a validation error, empty otherwise
    pub fn fields(&self) -> &[&'static str] {
        match self {
            Self::Validation { fields, .. } => fields.as_slice(),
            _ => &[],
        }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Operation result with optional context (for JSON output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub context: Option<HashMap<String, serde_json::Value>>,
}

impl<T> OperationResult<T> {
    /// Create a successful result
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            context: None,
        }
    }

    /// Create a failed result
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            context: None,
        }
    }

    /// Create a failed result with context
    pub fn fail_with_context(
        error: impl Into<String>,
        context: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            context: Some(context),
        }
    }
}

impl<T> OperationResult<T> {
    /// Create a failed result describing a core error
    ///
    /// The context carries the error `kind` and, for validation errors,
    /// the offending `fields`.
    pub fn from_error(error: &Error) -> Self {
        let mut context = HashMap::new();
        context.insert("kind".to_string(), serde_json::Value::from(error.kind()));
        if !error.fields().is_empty() {
            context.insert("fields".to_string(), serde_json::Value::from(error.fields().to_vec()));
        }
        Self::fail_with_context(error.to_string(), context)
    }
}

impl<T> From<Result<T>> for OperationResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::from_error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_result_ok() {
        let result: OperationResult<i32> = OperationResult::ok(42);
        assert!(result.success);
        assert_eq!(result.data, Some(42));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_operation_result_fail() {
        let result: OperationResult<i32> = OperationResult::fail("Something went wrong");
        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(result.error, Some("Something went wrong".to_string()));
    }

    #[test]
    fn test_from_result() {
        let ok: Result<i32> = Ok(42);
        let result: OperationResult<i32> = ok.into();
        assert!(result.success);

        let err: Result<i32> = Err(Error::validation("message", vec!["content", "sender"]));
        let result: OperationResult<i32> = err.into();
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Validation error: invalid message content, sender")
        );
        let context = result.context.unwrap();
        assert_eq!(context["kind"], "validation");
        assert_eq!(context["fields"], serde_json::json!(["content", "sender"]));
    }

    #[test]
    fn test_persistence_error_keeps_source() {
        let err: Error = StorageError::unavailable("disk offline").into();
        assert_eq!(err.kind(), "persistence");
        assert!(err.fields().is_empty());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "Persistence error: storage unavailable: disk offline");
    }
}
