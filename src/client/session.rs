//! Controller session handling
//!
//! [`UnifiClient`] owns the credentials and the cookie-backed HTTP transport.
//! A successful [`UnifiClient::login`] flips an in-memory flag; the session
//! cookie itself travels in the jar and is replayed on every later request.
//! The flag is never re-validated against the controller, so an expired
//! server-side session shows up as a failed command, not as a logout.

use crate::client::network::TransportSpec;
use crate::config::settings::ControllerSettings;
use crate::types::LoginRequest;
use crate::{Error, Result};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Content type for every controller call
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Login endpoint, relative to the base URL
pub const LOGIN_PATH: &str = "/api/login";

/// Session client for a single controller and site
///
/// One call at a time: [`login`](Self::login) takes `&mut self`, and the
/// client holds no internal locking.
pub struct UnifiClient {
    username: String,
    password: String,
    base_url: String,
    site: String,
    version: String,
    jar: Arc<Jar>,
    client: Client,
    logged_in: bool,
}

impl UnifiClient {
    /// Create a client. Performs no I/O.
    ///
    /// `version` is the controller version tag; it is kept for the caller's
    /// reference and never sent. With `insecure` set, certificate validation
    /// is skipped entirely.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, like
    /// [`reqwest::Client::new`]. Use [`try_new`](Self::try_new) to handle
    /// that case.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        url: impl Into<String>,
        site: impl Into<String>,
        version: impl Into<String>,
        insecure: bool,
    ) -> Self {
        match Self::try_new(username, password, url, site, version, insecure) {
            Ok(client) => client,
            Err(e) => panic!("failed to build controller HTTP client: {}", e),
        }
    }

    /// Fallible twin of [`new`](Self::new)
    pub fn try_new(
        username: impl Into<String>,
        password: impl Into<String>,
        url: impl Into<String>,
        site: impl Into<String>,
        version: impl Into<String>,
        insecure: bool,
    ) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let client = TransportSpec::new()
            .with_insecure(insecure)
            .build_client(jar.clone())?;

        Ok(Self {
            username: username.into(),
            password: password.into(),
            base_url: url.into().trim_end_matches('/').to_string(),
            site: site.into(),
            version: version.into(),
            jar,
            client,
            logged_in: false,
        })
    }

    /// Create a client from loaded controller settings
    pub fn from_settings(settings: &ControllerSettings) -> Result<Self> {
        Self::try_new(
            settings.username.as_str(),
            settings.password.as_str(),
            settings.url.as_str(),
            settings.site.as_str(),
            settings.version.as_str(),
            settings.insecure,
        )
    }

    /// Authenticate against the controller
    ///
    /// Returns immediately, without a request, once a session is held.
    /// HTTP 400 maps to [`Error::BadCredentials`]; any other non-200 to
    /// [`Error::UnknownLoginFailure`] with the response body logged.
    pub async fn login(&mut self) -> Result<()> {
        if self.logged_in {
            debug!("Session already established, skipping login");
            return Ok(());
        }

        let payload = LoginRequest {
            username: &self.username,
            password: &self.password,
        };

        debug!("Logging in to {} as {}", self.base_url, self.username);
        let response = self.api(LOGIN_PATH, &payload).await?;
        let status = response.status();

        if status == StatusCode::BAD_REQUEST {
            warn!("Controller rejected credentials for {}", self.username);
            return Err(Error::BadCredentials);
        }

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("Unknown login failure (HTTP {}): {}", status, body);
            return Err(Error::UnknownLoginFailure {
                status: status.as_u16(),
            });
        }

        self.logged_in = true;
        info!("Logged in to controller {}", self.base_url);
        Ok(())
    }

    /// POST `body` as JSON to `base_url + path`
    ///
    /// Status codes are left to the caller.
    pub(crate) async fn api<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let bytes = serde_json::to_vec(body)?;

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(bytes)
            .send()
            .await?;

        debug!("POST {} -> {}", url, response.status());
        Ok(response)
    }

    /// Whether a login has succeeded on this client
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Whether the cookie jar holds any cookie for the controller URL
    pub fn has_session_cookie(&self) -> bool {
        url::Url::parse(&self.base_url)
            .ok()
            .and_then(|url| self.jar.cookies(&url))
            .is_some()
    }

    /// Controller base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Site identifier used to scope commands
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Controller version tag supplied at construction
    pub fn controller_version(&self) -> &str {
        &self.version
    }

    /// Account name used for login
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for UnifiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnifiClient")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("site", &self.site)
            .field("version", &self.version)
            .field("logged_in", &self.logged_in)
            .finish_non_exhaustive()
    }
}
