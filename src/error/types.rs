//! Error taxonomy for the controller client
//!
//! Status-derived failures (login, guest authorization) are kept apart from
//! transport errors so callers can tell "the controller said no" from
//! "the controller could not be reached".

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// A command was issued before a successful login
    #[error("Not logged in to controller")]
    NotLoggedIn,

    /// The controller rejected the credentials (HTTP 400 on login)
    #[error("Bad login credentials")]
    BadCredentials,

    /// Login returned a status other than 200 or 400
    #[error("Unknown login failure (HTTP {status})")]
    UnknownLoginFailure {
        /// HTTP status code returned by the controller
        status: u16,
    },

    /// Guest authorization returned a status other than 200
    #[error("Guest authorization failed (HTTP {status})")]
    UnknownAuthFailure {
        /// HTTP status code returned by the controller
        status: u16,
    },

    /// Transport-level errors (DNS, TLS, connection refused, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The configuration field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },

    /// Validation errors
    #[error("Validation failed for {field}: {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Error message describing the validation failure
        message: String,
        /// The invalid value that caused the validation to fail
        value: Option<String>,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(field: S, message: S) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    /// Create a validation error carrying the offending value
    pub fn validation_with_value<S: Into<String>>(field: S, message: S, value: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
            value: Some(value.into()),
        }
    }

    /// True for errors reported by the controller through an HTTP status
    pub fn is_controller_rejection(&self) -> bool {
        matches!(
            self,
            Error::BadCredentials
                | Error::UnknownLoginFailure { .. }
                | Error::UnknownAuthFailure { .. }
        )
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadCredentials => Some(400),
            Error::UnknownLoginFailure { status } | Error::UnknownAuthFailure { status } => {
                Some(*status)
            }
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::NotLoggedIn => "session",
            Error::BadCredentials => "login",
            Error::UnknownLoginFailure { .. } => "login",
            Error::UnknownAuthFailure { .. } => "authorize_guest",
            Error::Http(..) => "http",
            Error::Json(..) => "json",
            Error::Toml(..) => "toml",
            Error::Url(..) => "url",
            Error::Io(..) => "io",
            Error::Config { .. } => "config",
            Error::Validation { .. } => "validation",
        }
    }
}
