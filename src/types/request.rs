//! Request type definitions
//!
//! JSON bodies sent to the controller: the login payload, the guest
//! descriptor, and the command envelope that wraps it.

use serde::{Deserialize, Serialize};

/// Command name for granting a guest network access
pub const AUTHORIZE_GUEST_CMD: &str = "authorize-guest";

/// Login payload for `POST /api/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Controller account name
    pub username: &'a str,
    /// Controller account password
    pub password: &'a str,
}

/// Guest device to authorize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDescriptor {
    /// Client MAC address, colon-separated hex pairs
    pub mac: String,

    /// Minutes from now until access is removed
    pub minutes: u32,

    /// Upload speed limit (Kibit/s)
    pub up: u32,

    /// Download speed limit (Kibit/s)
    pub down: u32,

    /// Data cap for the session (MiB)
    pub data: u32,
}

impl GuestDescriptor {
    /// Create a descriptor with no rate limits or data cap
    pub fn new(mac: impl Into<String>, minutes: u32) -> Self {
        Self {
            mac: mac.into(),
            minutes,
            up: 0,
            down: 0,
            data: 0,
        }
    }

    /// Set upload limit in Kibit/s
    pub fn with_up(mut self, up: u32) -> Self {
        self.up = up;
        self
    }

    /// Set download limit in Kibit/s
    pub fn with_down(mut self, down: u32) -> Self {
        self.down = down;
        self
    }

    /// Set data cap in MiB
    pub fn with_data(mut self, data: u32) -> Self {
        self.data = data;
        self
    }

    /// Check the MAC address is six colon-separated hex pairs
    pub fn validate(&self) -> crate::Result<()> {
        if is_valid_mac(&self.mac) {
            Ok(())
        } else {
            Err(crate::Error::validation_with_value(
                "mac",
                "expected six colon-separated hex pairs",
                self.mac.as_str(),
            ))
        }
    }
}

/// Returns true when `mac` looks like `aa:bb:cc:dd:ee:ff`
pub fn is_valid_mac(mac: &str) -> bool {
    let parts: Vec<&str> = mac.split(':').collect();
    parts.len() == 6
        && parts
            .iter()
            .all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Controller command with the payload fields flattened alongside `cmd`
#[derive(Debug, Clone, Serialize)]
pub struct CommandEnvelope<'a, T: Serialize> {
    /// Command name
    pub cmd: &'a str,

    #[serde(flatten)]
    pub payload: &'a T,
}

impl<'a, T: Serialize> CommandEnvelope<'a, T> {
    /// Wrap `payload` under command `cmd`
    pub fn new(cmd: &'a str, payload: &'a T) -> Self {
        Self { cmd, payload }
    }
}

impl<'a> CommandEnvelope<'a, GuestDescriptor> {
    /// `authorize-guest` envelope for `guest`
    pub fn authorize_guest(guest: &'a GuestDescriptor) -> Self {
        Self::new(AUTHORIZE_GUEST_CMD, guest)
    }
}
