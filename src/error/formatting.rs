//! Error formatting utilities
//!
//! Renders errors for terminal output and structured log records.

use crate::Error;
use std::error::Error as StdError;

/// Format error for display, appending each distinct cause in the source chain
pub fn format_error(error: &Error) -> String {
    let formatted = match error {
        Error::Validation {
            field,
            message,
            value,
        } => match value {
            Some(val) => format!(
                "Validation failed for {} (value: '{}'): {}",
                field, val, message
            ),
            None => format!("Validation failed for {}: {}", field, message),
        },

        Error::BadCredentials => {
            "Bad login credentials: the controller rejected the username or password".to_string()
        }

        _ => error.to_string(),
    };

    let mut result = formatted;
    let mut source = error.source();

    while let Some(cause) = source {
        if !result.contains(&cause.to_string()) {
            result = format!("{} (caused by {})", result, cause);
        }
        source = cause.source();
    }

    result
}

/// Format error for logging with structured data
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    let mut log_data = serde_json::json!({
        "message": format_error(error),
        "category": error.category(),
        "controller_rejection": error.is_controller_rejection(),
    });

    if let Some(status) = error.status() {
        log_data["status"] = serde_json::Value::Number(status.into());
    }

    if let Error::Config { field, .. } | Error::Validation { field, .. } = error {
        log_data["field"] = serde_json::Value::String(field.clone());
    }

    log_data
}
