//! Shared CLI plumbing
//!
//! Connection flags common to every subcommand, settings resolution and
//! logging setup.

use anyhow::{Context, Result};
use clap::Args;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{Settings, client::UnifiClient, config::ConfigLoader};

/// Controller connection flags
#[derive(Debug, Default, Args)]
pub struct ControllerArgs {
    /// Configuration file path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Controller base URL (e.g. https://192.168.1.1:8443)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Controller account name
    #[arg(short, long, global = true, value_name = "USERNAME")]
    pub username: Option<String>,

    /// Controller account password
    #[arg(short, long, global = true, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Site identifier
    #[arg(short, long, global = true, value_name = "SITE")]
    pub site: Option<String>,

    /// Disable TLS certificate verification (self-signed controllers)
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,
}

impl ControllerArgs {
    /// Resolve settings with precedence: flags > environment > file > defaults
    pub fn resolve_settings(&self) -> Result<Settings> {
        let config_path = match &self.config {
            Some(config) => Some(std::path::PathBuf::from(config)),
            None => ConfigLoader::get_config_path(),
        };

        let mut settings = ConfigLoader::new()
            .load(config_path.as_deref())
            .context("Failed to load configuration")?;

        if let Some(url) = &self.url {
            settings.controller.url = url.clone();
        }
        if let Some(username) = &self.username {
            settings.controller.username = username.clone();
        }
        if let Some(password) = &self.password {
            settings.controller.password = password.clone();
        }
        if let Some(site) = &self.site {
            settings.controller.site = site.clone();
        }
        if self.insecure {
            settings.controller.insecure = true;
        }

        settings
            .validate()
            .context("Invalid command-line overrides")?;
        Ok(settings)
    }

    /// Build a client from resolved settings
    pub fn connect(&self, settings: &Settings) -> Result<UnifiClient> {
        let controller = settings
            .require_controller()
            .context("Controller connection is not configured")?;
        Ok(UnifiClient::from_settings(controller)?)
    }
}

/// Initialize logging to stderr
///
/// Precedence: `--verbose` (debug), then `RUST_LOG`, then `logging.level`.
pub fn init_logging(verbose: bool, settings: &Settings) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&settings.logging.level)
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
