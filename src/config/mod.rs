//! Configuration management
//!
//! This module handles loading controller credentials, guest defaults and
//! logging settings for the command-line front end.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{ControllerSettings, GuestSettings, LoggingSettings, Settings};

// Serializes tests that touch process-wide environment variables
#[cfg(test)]
pub(crate) static ENV_TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
