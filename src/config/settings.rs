//! Configuration settings
//!
//! Loaded from a TOML file and environment variables; command-line flags are
//! applied on top by the binary.

use serde::{Deserialize, Serialize};

fn default_site() -> String {
    "default".to_string()
}

fn default_version() -> String {
    "5.12".to_string()
}

fn default_minutes() -> u32 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Controller connection
    #[serde(default)]
    pub controller: ControllerSettings,
    /// Defaults for guest authorization
    #[serde(default)]
    pub guest: GuestSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Controller endpoint and credentials
#[derive(Clone, Serialize, Deserialize)]
pub struct ControllerSettings {
    /// Base URL, e.g. `https://192.168.1.1:8443`
    #[serde(default)]
    pub url: String,
    /// Account name
    #[serde(default)]
    pub username: String,
    /// Account password
    #[serde(default)]
    pub password: String,
    /// Site identifier
    #[serde(default = "default_site")]
    pub site: String,
    /// Controller version tag (informational)
    #[serde(default = "default_version")]
    pub version: String,
    /// Skip TLS certificate verification
    #[serde(default)]
    pub insecure: bool,
}

/// Guest authorization defaults used when the CLI omits a value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestSettings {
    /// Access duration in minutes
    #[serde(default = "default_minutes")]
    pub minutes: u32,
    /// Upload limit in Kibit/s (0 = unlimited)
    #[serde(default)]
    pub up: u32,
    /// Download limit in Kibit/s (0 = unlimited)
    #[serde(default)]
    pub down: u32,
    /// Data cap in MiB (0 = unlimited)
    #[serde(default)]
    pub data: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: String::new(),
            password: String::new(),
            site: default_site(),
            version: default_version(),
            insecure: false,
        }
    }
}

impl std::fmt::Debug for ControllerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerSettings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("site", &self.site)
            .field("version", &self.version)
            .field("insecure", &self.insecure)
            .finish()
    }
}

impl Default for GuestSettings {
    fn default() -> Self {
        Self {
            minutes: default_minutes(),
            up: 0,
            down: 0,
            data: 0,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut settings = Self::default();
        settings.apply_env()?;
        Ok(settings)
    }

    /// Load settings from configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config("file", format!("Failed to read config file: {}", e).as_str())
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            crate::Error::config("file", format!("Failed to parse config file: {}", e).as_str())
        })?;

        Ok(settings)
    }

    /// Override fields with any `UNIFI_*` / `LOG_LEVEL` variables that are set
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        self.apply_env()?;
        Ok(self)
    }

    fn apply_env(&mut self) -> crate::Result<()> {
        if let Ok(url) = std::env::var("UNIFI_URL") {
            self.controller.url = url;
        }
        if let Ok(username) = std::env::var("UNIFI_USERNAME") {
            self.controller.username = username;
        }
        if let Ok(password) = std::env::var("UNIFI_PASSWORD") {
            self.controller.password = password;
        }
        if let Ok(site) = std::env::var("UNIFI_SITE") {
            self.controller.site = site;
        }
        if let Ok(version) = std::env::var("UNIFI_VERSION") {
            self.controller.version = version;
        }
        if let Ok(insecure) = std::env::var("UNIFI_INSECURE") {
            self.controller.insecure = parse_bool("UNIFI_INSECURE", &insecure)?;
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Validate configuration settings
    ///
    /// Credentials are checked separately by
    /// [`require_controller`](Self::require_controller).
    pub fn validate(&self) -> crate::Result<()> {
        if !self.controller.url.is_empty() {
            let url = url::Url::parse(&self.controller.url).map_err(|e| {
                crate::Error::config(
                    "controller.url",
                    format!("Invalid URL '{}': {}", self.controller.url, e).as_str(),
                )
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(crate::Error::config(
                    "controller.url",
                    format!("Unsupported scheme: {}", url.scheme()).as_str(),
                ));
            }
        }

        if self.controller.site.is_empty() {
            return Err(crate::Error::config(
                "controller.site",
                "Site identifier cannot be empty",
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "logging.level",
                    format!("Invalid log level: {}", self.logging.level).as_str(),
                ));
            }
        }

        Ok(())
    }

    /// Fail unless URL and credentials are all present
    pub fn require_controller(&self) -> crate::Result<&ControllerSettings> {
        for (field, value) in [
            ("controller.url", &self.controller.url),
            ("controller.username", &self.controller.username),
            ("controller.password", &self.controller.password),
        ] {
            if value.is_empty() {
                return Err(crate::Error::config(field, "missing value"));
            }
        }
        Ok(&self.controller)
    }
}

fn parse_bool(name: &str, value: &str) -> crate::Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(crate::Error::config(
            name,
            format!("Invalid boolean: {}", value).as_str(),
        )),
    }
}
