//! Guest authorization command

use crate::client::session::UnifiClient;
use crate::types::{CommandEnvelope, GuestDescriptor};
use crate::{Error, Result};
use reqwest::StatusCode;
use tracing::{debug, info, warn};

impl UnifiClient {
    /// Path of the station-manager command endpoint for this client's site
    pub fn stamgr_path(&self) -> String {
        format!("/api/s/{}/cmd/stamgr", self.site())
    }

    /// Grant `guest` network access
    ///
    /// Fails with [`Error::NotLoggedIn`] before any I/O if
    /// [`login`](Self::login) has not succeeded. Any non-200 reply is
    /// [`Error::UnknownAuthFailure`]; the response body is logged, never
    /// parsed.
    pub async fn authorize_guest(&self, guest: &GuestDescriptor) -> Result<()> {
        if !self.is_logged_in() {
            return Err(Error::NotLoggedIn);
        }

        let envelope = CommandEnvelope::authorize_guest(guest);
        let payload = serde_json::to_string(&envelope)?;
        debug!("authorize-guest payload: {}", payload);

        let response = self.api(&self.stamgr_path(), &envelope).await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "Failed to authorize guest {} (HTTP {}): {}",
                guest.mac, status, body
            );
            return Err(Error::UnknownAuthFailure {
                status: status.as_u16(),
            });
        }

        info!(
            "Authorized guest {} for {} minutes on site {}",
            guest.mac,
            guest.minutes,
            self.site()
        );
        Ok(())
    }
}
